//! Page title block with optional description line.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6 sm:mb-8">
            <h1 class="text-2xl sm:text-3xl font-bold text-gray-900">{title}</h1>
            {description
                .map(|text| view! { <p class="mt-2 text-sm sm:text-base text-gray-600">{text}</p> })}
        </div>
    }
}
