//! Full-page loading placeholder.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[prop(default = "Loading...".to_owned(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto"></div>
                <p class="mt-4 text-gray-600">{message}</p>
            </div>
        </div>
    }
}
