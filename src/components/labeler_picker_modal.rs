//! Dialog for picking a labeler to add to a group.
//!
//! Loads the full labeler list itself on mount, hides accounts that are
//! already members, and narrows by a case-insensitive username search.

#[cfg(test)]
#[path = "labeler_picker_modal_test.rs"]
mod labeler_picker_modal_test;

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::net::types::Labeler;

/// Labelers available to add: not already members, matching the search term.
pub fn available_labelers(
    labelers: &[Labeler],
    exclude_ids: &[i64],
    search: &str,
) -> Vec<Labeler> {
    let needle = search.trim().to_lowercase();
    labelers
        .iter()
        .filter(|labeler| !exclude_ids.contains(&labeler.id))
        .filter(|labeler| needle.is_empty() || labeler.username.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Message for an empty picker list, depending on whether a search narrowed
/// it down.
pub fn empty_picker_message(search: &str) -> &'static str {
    if search.trim().is_empty() {
        "No available labelers to add."
    } else {
        "No labelers found matching your search."
    }
}

#[component]
pub fn LabelerPickerModal(
    exclude_ids: Vec<i64>,
    on_select: Callback<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let labelers = RwSignal::new(Vec::<Labeler>::new());
    let search = RwSignal::new(String::new());
    let load_error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        leptos::task::spawn_local(async move {
            match crate::net::api::api_data(api.list_labelers().await) {
                Ok(data) => labelers.set(data.labelers),
                Err(message) => load_error.set(message),
            }
        });
    }

    let visible = Memo::new(move |_| {
        available_labelers(&labelers.get(), &exclude_ids, &search.get())
    });

    view! {
        <Modal title="Add Labeler to Group" on_close=on_close>
            <div class="space-y-4">
                <input
                    class="block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    type="text"
                    placeholder="Search labelers..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Show when=move || !load_error.get().is_empty()>
                    <p class="text-sm text-red-600">{move || load_error.get()}</p>
                </Show>
                <div class="max-h-64 overflow-y-auto divide-y divide-gray-200">
                    {move || {
                        let candidates = visible.get();
                        if candidates.is_empty() {
                            view! {
                                <p class="py-4 text-sm text-gray-500 text-center">
                                    {empty_picker_message(&search.get())}
                                </p>
                            }
                            .into_any()
                        } else {
                            candidates
                                .into_iter()
                                .map(|labeler| {
                                    let id = labeler.id;
                                    view! {
                                        <button
                                            class="w-full px-3 py-2 text-left text-sm text-gray-900 hover:bg-gray-50"
                                            on:click=move |_| on_select.run(id)
                                        >
                                            {labeler.username}
                                        </button>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Modal>
    }
}
