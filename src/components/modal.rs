//! Centered dialog with a blurred backdrop.
//!
//! Open/closed state stays with the calling page (wrap in `<Show>`); the
//! modal only owns backdrop dismissal and click containment.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-white bg-opacity-20 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl w-full max-w-lg border border-gray-200"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="px-6 py-4 border-b border-gray-200">
                    <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                </div>
                <div class="px-6 py-4">{children()}</div>
            </div>
        </div>
    }
}
