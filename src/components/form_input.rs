//! Labeled form field bound to a string signal.

use leptos::prelude::*;

/// Text input (or textarea when `rows` is set) with a label and an inline
/// validation error. The error signal holds the empty string when the field
/// is valid.
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text".to_owned(), into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: Signal<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let field_class = move || {
        format!(
            "mt-1 block w-full px-3 py-2 border rounded-md focus:outline-none {}",
            if error.get().is_empty() {
                "border-gray-300 focus:ring-blue-500 focus:border-blue-500"
            } else {
                "border-red-300 focus:ring-red-500 focus:border-red-500"
            }
        )
    };
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            {match rows {
                Some(rows) => view! {
                    <textarea
                        class=field_class
                        placeholder=placeholder
                        rows=rows
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    ></textarea>
                }
                .into_any(),
                None => view! {
                    <input
                        class=field_class
                        type=input_type
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                }
                .into_any(),
            }}
            <Show when=move || !error.get().is_empty()>
                <p class="mt-1 text-sm text-red-600">{move || error.get()}</p>
            </Show>
        </div>
    }
}
