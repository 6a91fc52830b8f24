//! Back navigation link shown above detail pages.

use leptos::prelude::*;

/// Arrow link back to a parent route.
#[component]
pub fn BackButton(
    #[prop(into)] href: String,
    #[prop(default = "Back".to_owned(), into)] label: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-blue-600 hover:text-blue-800 inline-flex items-center text-sm sm:text-base mb-4"
        >
            <span class="mr-2" aria-hidden="true">"\u{2190}"</span>
            {label}
        </a>
    }
}
