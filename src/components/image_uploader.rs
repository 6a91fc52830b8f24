//! Multi-file image picker with preview and per-file validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting files validates each against the type/size limits, reads the
//! survivors to base64, and shows them in a confirmation dialog; only on
//! confirm do the prepared uploads reach the page through `on_select`.
//! Rejected files surface one error at a time through `on_error`.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::util::files::{PendingUpload, image_data_url};

#[component]
pub fn ImageUploader(
    on_select: Callback<Vec<PendingUpload>>,
    on_error: Callback<String>,
    #[prop(optional, into)] uploading: Signal<bool>,
) -> impl IntoView {
    let pending = RwSignal::new(Vec::<PendingUpload>::new());
    let show_confirm = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    #[cfg(feature = "hydrate")]
    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };
        let picked: Vec<web_sys::File> =
            (0..files.length()).filter_map(|index| files.item(index)).collect();
        input.set_value("");
        leptos::task::spawn_local(async move {
            let mut prepared = Vec::new();
            for file in picked {
                let filename = file.name();
                let mime = file.type_();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let size = file.size() as u64;
                if let Err(message) = crate::util::files::validate_upload(&filename, &mime, size) {
                    on_error.run(message);
                    continue;
                }
                match crate::util::files::read_file_base64(file).await {
                    Ok(base64_data) => {
                        prepared.push(PendingUpload { filename, mime, base64_data });
                    }
                    Err(message) => on_error.run(message),
                }
            }
            if !prepared.is_empty() {
                pending.set(prepared);
                show_confirm.set(true);
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let on_change = move |_| {
        let _ = on_error;
    };

    let on_cancel = Callback::new(move |()| {
        pending.set(Vec::new());
        show_confirm.set(false);
    });

    let on_confirm = move |_| {
        let prepared = pending.get();
        pending.set(Vec::new());
        show_confirm.set(false);
        on_select.run(prepared);
    };

    let remove_at = move |index: usize| {
        pending.update(|files| {
            files.remove(index);
        });
        if pending.get_untracked().is_empty() {
            show_confirm.set(false);
        }
    };

    view! {
        <div>
            <input
                node_ref=input_ref
                class="hidden"
                type="file"
                accept="image/png,image/jpeg,image/jpg"
                multiple
                on:change=on_change
            />
            <button
                type="button"
                class="px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-300 disabled:cursor-not-allowed"
                disabled=move || uploading.get()
                on:click=on_pick
            >
                {move || if uploading.get() { "Uploading..." } else { "Select Images" }}
            </button>

            <Show when=move || show_confirm.get()>
                <Modal title="Confirm Upload" on_close=on_cancel>
                    <div class="space-y-4">
                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-3 max-h-64 overflow-y-auto">
                            {move || {
                                pending
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, file)| {
                                        let src = image_data_url(&file.mime, &file.base64_data);
                                        view! {
                                            <div class="relative border border-gray-200 rounded-lg p-2">
                                                <img
                                                    src=src
                                                    alt=file.filename.clone()
                                                    class="h-20 w-full object-contain"
                                                />
                                                <p class="mt-1 text-xs text-gray-600 truncate">
                                                    {file.filename}
                                                </p>
                                                <button
                                                    class="absolute top-1 right-1 text-gray-400 hover:text-red-600"
                                                    aria-label="Remove file"
                                                    on:click=move |_| remove_at(index)
                                                >
                                                    "\u{2715}"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <div class="flex justify-end space-x-3">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md text-sm font-medium bg-white text-gray-700 border border-gray-300 hover:bg-gray-50"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700"
                                on:click=on_confirm
                            >
                                {move || format!("Upload {} file(s)", pending.get().len())}
                            </button>
                        </div>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
