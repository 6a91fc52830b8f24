//! Inline error and success banners.
//!
//! Pages store banner text in a `RwSignal<String>`; an empty string means no
//! banner. Both components render nothing until text appears and clear the
//! signal when dismissed.

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded flex items-center justify-between mb-4">
                <span>{move || message.get()}</span>
                <button
                    class="ml-4 text-red-400 hover:text-red-600"
                    aria-label="Close error message"
                    on:click=move |_| message.set(String::new())
                >
                    "\u{2715}"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded flex items-center justify-between mb-4">
                <span>{move || message.get()}</span>
                <button
                    class="ml-4 text-green-400 hover:text-green-600"
                    aria-label="Close success message"
                    on:click=move |_| message.set(String::new())
                >
                    "\u{2715}"
                </button>
            </div>
        </Show>
    }
}
