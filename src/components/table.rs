//! Data table chrome with a fixed header row.
//!
//! Row markup varies too much across pages to abstract, so callers render
//! their own `<tr>` elements as children.

use leptos::prelude::*;

#[component]
pub fn Table(headers: Vec<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="overflow-hidden shadow ring-1 ring-black ring-opacity-5 rounded-lg">
            <table class="min-w-full divide-y divide-gray-300">
                <thead class="bg-gray-50">
                    <tr>
                        {headers
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        {label}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">{children()}</tbody>
            </table>
        </div>
    }
}
