//! Image labeling screen: toggle group tags, ask for suggestions, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting either returns to the group list or advances to the first
//! still-pending image in the same group, fetched fresh so another tab's
//! progress is respected.

#[cfg(test)]
#[path = "labeler_image_test.rs"]
mod labeler_image_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::back_button::BackButton;
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::message::ErrorMessage;
use crate::components::page_header::PageHeader;
use crate::net::api::ApiClient;
use crate::net::types::{ImageStatus, LabelerImage, LabelerImageDetail};
use crate::util::files::image_data_url;

/// Selected ids after toggling `tag_id` in or out.
pub fn toggled_selection(selected: &[i64], tag_id: i64) -> Vec<i64> {
    if selected.contains(&tag_id) {
        selected.iter().copied().filter(|id| *id != tag_id).collect()
    } else {
        selected.iter().copied().chain(std::iter::once(tag_id)).collect()
    }
}

/// First pending image other than the one just submitted, if any.
pub fn next_pending_image(images: &[LabelerImage], current_id: i64) -> Option<i64> {
    images
        .iter()
        .find(|image| image.status == ImageStatus::Pending && image.id != current_id)
        .map(|image| image.id)
}

/// Whether a group tag was named by the suggestion endpoint.
pub fn is_suggested(suggestions: &[String], tag_name: &str) -> bool {
    suggestions.iter().any(|name| name == tag_name)
}

#[component]
pub fn LabelerImagePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let group_id = move || {
        params.read().get("id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };
    let image_id = move || {
        params.read().get("image_id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };

    let detail = RwSignal::new(None::<LabelerImageDetail>);
    let selected = RwSignal::new(Vec::<i64>::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let suggesting = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            loading.set(true);
            suggestions.set(Vec::new());

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let gid = group_id();
                let iid = image_id();
                leptos::task::spawn_local(async move {
                    match api.labeler_image_detail(gid, iid).await {
                        Ok(success) => {
                            let data = success.data;
                            selected.set(data.current_tags.iter().map(|tag| tag.id).collect());
                            detail.set(Some(data));
                        }
                        Err(err) => error.set(err.message()),
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
                loading.set(false);
            }
        }
    });
    Effect::new(move || {
        let _ = params.read().get("image_id");
        load.run(());
    });

    let on_suggest = Callback::new({
        let api = api.clone();
        move |()| {
            if suggesting.get() {
                return;
            }
            suggesting.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let iid = image_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(
                        api.suggest_tags(iid, selected.get_untracked()).await,
                    ) {
                        Ok(data) => suggestions.set(data.suggested_tags),
                        Err(message) => {
                            log::warn!("tag suggestion failed: {message}");
                            suggestions.set(Vec::new());
                        }
                    }
                    suggesting.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
                suggesting.set(false);
            }
        }
    });

    let submit = Callback::new({
        let api = api.clone();
        let navigate = navigate.clone();
        move |exit_after: bool| {
            if submitting.get() {
                return;
            }
            submitting.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let navigate = navigate.clone();
                let gid = group_id();
                let iid = image_id();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::api_message(
                        api.submit_image_tags(gid, iid, selected.get_untracked()).await,
                    );
                    if let Err(message) = result {
                        error.set(message);
                        submitting.set(false);
                        return;
                    }
                    if exit_after {
                        navigate("/labeler/groups", NavigateOptions::default());
                        return;
                    }
                    // Advance to the next image the labeler still owes.
                    let target = match crate::net::api::api_data(
                        api.labeler_group_images(gid).await,
                    ) {
                        Ok(data) => next_pending_image(&data.images, iid)
                            .map(|next| format!("/labeler/groups/{gid}/images/{next}")),
                        Err(_) => None,
                    };
                    let target =
                        target.unwrap_or_else(|| format!("/labeler/groups/{gid}"));
                    submitting.set(false);
                    navigate(&target, NavigateOptions::default());
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &navigate, exit_after);
                submitting.set(false);
            }
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <BackButton
                    href=format!("/labeler/groups/{}", group_id())
                    label="Back to Group"
                />
                <Show
                    when=move || detail.get().is_some()
                    fallback=move || {
                        view! {
                            <Show
                                when=move || !loading.get()
                                fallback=|| view! { <LoadingSpinner/> }
                            >
                                <ErrorMessage message=error/>
                            </Show>
                        }
                    }
                >
                    {move || {
                        detail
                            .get()
                            .map(|data| {
                                view! { <PageHeader title=data.image.filename.clone()/> }
                            })
                    }}
                    <ErrorMessage message=error/>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <Card>
                            <div class="p-4 sm:p-6">
                                {move || {
                                    detail
                                        .get()
                                        .map(|data| {
                                            let src = image_data_url(
                                                &data.image.filetype,
                                                &data.image.base64_data,
                                            );
                                            view! {
                                                <div class="flex justify-center h-96">
                                                    <img
                                                        src=src
                                                        alt=data.image.filename.clone()
                                                        class="max-w-full h-full object-contain rounded-lg shadow-lg"
                                                    />
                                                </div>
                                            }
                                        })
                                }}
                            </div>
                        </Card>

                        <Card>
                            <div class="p-4 sm:p-6">
                                <div class="flex items-center justify-between mb-4">
                                    <h3 class="text-lg font-medium text-gray-900">"Tags"</h3>
                                    <button
                                        class="px-3 py-1.5 rounded-md text-sm font-medium bg-purple-600 text-white hover:bg-purple-700 disabled:bg-purple-300"
                                        disabled=move || suggesting.get()
                                        on:click=move |_| on_suggest.run(())
                                    >
                                        {move || {
                                            if suggesting.get() { "Suggesting..." } else { "Suggest Tags" }
                                        }}
                                    </button>
                                </div>
                                <Show when=move || !suggestions.get().is_empty()>
                                    <p class="text-xs text-purple-600 mb-3">
                                        "Suggested tags are highlighted below."
                                    </p>
                                </Show>
                                {move || {
                                    let tags =
                                        detail.get().map(|data| data.group_tags).unwrap_or_default();
                                    if tags.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No tags defined"
                                                description="This group has no tags to apply yet."
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <div class="flex flex-wrap gap-2">
                                                {tags
                                                    .into_iter()
                                                    .map(|tag| {
                                                        let tag_id = tag.id;
                                                        let name = tag.name.clone();
                                                        let class = move || {
                                                            let picked =
                                                                selected.get().contains(&tag_id);
                                                            let highlighted = is_suggested(
                                                                &suggestions.get(),
                                                                &name,
                                                            );
                                                            format!(
                                                                "px-3 py-2 rounded-full text-sm font-medium border-2 {}",
                                                                if picked {
                                                                    "bg-green-100 text-green-800 border-green-300"
                                                                } else if highlighted {
                                                                    "bg-purple-50 text-purple-800 border-purple-300"
                                                                } else {
                                                                    "bg-gray-100 text-gray-800 border-gray-200 hover:bg-gray-200"
                                                                },
                                                            )
                                                        };
                                                        view! {
                                                            <button
                                                                class=class
                                                                on:click=move |_| {
                                                                    selected.update(|ids| {
                                                                        *ids = toggled_selection(ids, tag_id);
                                                                    });
                                                                }
                                                            >
                                                                {tag.name.clone()}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}

                                <div class="mt-6 flex justify-end space-x-3">
                                    <button
                                        class="px-4 py-2 rounded-md text-sm font-medium bg-white text-gray-700 border border-gray-300 hover:bg-gray-50 disabled:opacity-50"
                                        disabled=move || submitting.get()
                                        on:click=move |_| submit.run(true)
                                    >
                                        "Submit & Exit"
                                    </button>
                                    <button
                                        class="px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-300"
                                        disabled=move || submitting.get()
                                        on:click=move |_| submit.run(false)
                                    >
                                        {move || {
                                            if submitting.get() { "Submitting..." } else { "Submit & Next" }
                                        }}
                                    </button>
                                </div>
                            </div>
                        </Card>
                    </div>
                </Show>
            </div>
        </div>
    }
}
