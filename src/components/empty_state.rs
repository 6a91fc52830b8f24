//! Placeholder shown for empty lists and grids.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="text-center py-8">
            <h3 class="text-sm font-medium text-gray-900">{title}</h3>
            <p class="mt-1 text-sm text-gray-500">{description}</p>
        </div>
    }
}
