//! Horizontal tab bar for the group detail page.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use leptos::prelude::*;

/// One selectable tab with an optional item count in the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub id: &'static str,
    pub label: &'static str,
    pub count: Option<usize>,
}

/// Label text as rendered, with the count in parentheses when present.
pub fn tab_label(tab: &TabItem) -> String {
    match tab.count {
        Some(count) => format!("{} ({count})", tab.label),
        None => tab.label.to_owned(),
    }
}

#[component]
pub fn Tabs(#[prop(into)] tabs: Signal<Vec<TabItem>>, active: RwSignal<&'static str>) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex space-x-2 sm:space-x-8 px-4 sm:px-6 overflow-x-auto">
                {move || {
                    tabs.get()
                        .into_iter()
                        .map(|tab| {
                            let id = tab.id;
                            let label = tab_label(&tab);
                            let class = move || {
                                format!(
                                    "py-4 px-2 sm:px-1 border-b-2 font-medium text-xs sm:text-sm whitespace-nowrap {}",
                                    if active.get() == id {
                                        "border-blue-500 text-blue-600"
                                    } else {
                                        "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
                                    }
                                )
                            };
                            view! {
                                <button class=class on:click=move |_| active.set(id)>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}
