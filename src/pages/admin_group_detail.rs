//! Admin group detail: members, tags, and images in one tabbed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! One GET returns the group with its labelers, tags, and images; every
//! mutation re-fetches that snapshot rather than patching local state.

#[cfg(test)]
#[path = "admin_group_detail_test.rs"]
mod admin_group_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::back_button::BackButton;
use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::image_uploader::ImageUploader;
use crate::components::labeler_picker_modal::LabelerPickerModal;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::message::{ErrorMessage, SuccessMessage};
use crate::components::page_header::PageHeader;
use crate::components::tabs::{TabItem, Tabs};
use crate::components::tag_modal::TagModal;
use crate::net::api::ApiClient;
use crate::net::types::{GroupDetailData, Tag};

/// Tab bar entries with the counts from the loaded snapshot.
pub fn group_tabs(detail: &GroupDetailData) -> Vec<TabItem> {
    vec![
        TabItem { id: "labelers", label: "Labelers", count: Some(detail.labelers.len()) },
        TabItem { id: "tags", label: "Tags", count: Some(detail.tags.len()) },
        TabItem { id: "images", label: "Images", count: Some(detail.images.len()) },
    ]
}

/// Ids of the group's current members, for excluding them from the picker.
pub fn member_ids(detail: &GroupDetailData) -> Vec<i64> {
    detail.labelers.iter().map(|labeler| labeler.id).collect()
}

#[component]
pub fn AdminGroupDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let group_id = move || {
        params.read().get("id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };

    let detail = RwSignal::new(None::<GroupDetailData>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let active_tab = RwSignal::new("labelers");

    let show_picker = RwSignal::new(false);
    let tag_modal_open = RwSignal::new(false);
    let editing_tag = RwSignal::new(None::<Tag>);
    let tag_saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.group_detail(id).await) {
                        Ok(data) => detail.set(Some(data)),
                        Err(message) => error.set(message),
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
        let _ = params.read().get("id");
        reload.run(());
    });

    let on_add_member = Callback::new({
        let api = api.clone();
        move |labeler_id: i64| {
            show_picker.set(false);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_message(api.add_group_member(id, labeler_id).await)
                    {
                        Ok(_) => {
                            success.set("Labeler added to group.".to_owned());
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, labeler_id);
        }
    });

    let on_remove_member = Callback::new({
        let api = api.clone();
        move |labeler_id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_message(
                        api.remove_group_member(id, labeler_id).await,
                    ) {
                        Ok(_) => {
                            success.set("Labeler removed from group.".to_owned());
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, labeler_id);
        }
    });

    // Create when no tag is being edited, update otherwise.
    let on_tag_submit = Callback::new({
        let api = api.clone();
        move |(name, description): (String, Option<String>)| {
            tag_saving.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                let target = editing_tag.get_untracked();
                leptos::task::spawn_local(async move {
                    let result = match target {
                        Some(tag) => {
                            let request =
                                crate::net::types::UpdateTagRequest { name, description };
                            crate::net::api::api_data(api.update_tag(tag.id, &request).await)
                                .map(|_| "Tag updated.")
                        }
                        None => {
                            let request = crate::net::types::CreateTagRequest {
                                name,
                                description,
                                group_id: id,
                            };
                            crate::net::api::api_data(api.create_tag(&request).await)
                                .map(|_| "Tag created.")
                        }
                    };
                    match result {
                        Ok(message) => {
                            success.set(message.to_owned());
                            tag_modal_open.set(false);
                            editing_tag.set(None);
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                    tag_saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, name, description);
                tag_saving.set(false);
            }
        }
    });

    let on_tag_delete = Callback::new({
        let api = api.clone();
        move |tag_id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_message(api.delete_tag(tag_id).await) {
                        Ok(_) => {
                            success.set("Tag deleted.".to_owned());
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, tag_id);
        }
    });

    let on_upload = Callback::new({
        let api = api.clone();
        move |files: Vec<crate::util::files::PendingUpload>| {
            uploading.set(true);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                leptos::task::spawn_local(async move {
                    let mut failures = Vec::new();
                    let total = files.len();
                    for pending in files {
                        let request = crate::util::files::upload_request(&pending, id);
                        if let Err(message) =
                            crate::net::api::api_data(api.upload_image(&request).await)
                        {
                            failures.push(format!("{}: {message}", pending.filename));
                        }
                    }
                    if failures.is_empty() {
                        success.set(format!("Uploaded {total} image(s)."));
                    } else {
                        error.set(format!("Some uploads failed: {}", failures.join("; ")));
                    }
                    uploading.set(false);
                    reload.run(());
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, files);
                uploading.set(false);
            }
        }
    });

    let on_upload_error = Callback::new(move |message: String| error.set(message));

    let navigate_image = navigate.clone();
    let open_image = Callback::new(move |image_id: i64| {
        navigate_image(
            &format!("/admin/groups/{}/image/{image_id}", group_id()),
            NavigateOptions::default(),
        );
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <BackButton href="/admin/groups" label="Back to Groups"/>
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
                                view! {
                                    <PageHeader
                                        title=data.group.name.clone()
                                        description=data.group.description.clone().unwrap_or_default()
                                    />
                                }
                            })
                    }}
                    <ErrorMessage message=error/>
                    <SuccessMessage message=success/>

                    <Card>
                        <Tabs
                            tabs=Signal::derive(move || {
                                detail.get().map(|data| group_tabs(&data)).unwrap_or_default()
                            })
                            active=active_tab
                        />

                        // Labelers tab
                        <Show when=move || active_tab.get() == "labelers">
                            <div class="p-4 sm:p-6 space-y-4">
                                <div class="flex justify-end">
                                    <Button
                                        label="+ Add Labeler".to_owned()
                                        on_click=Callback::new(move |()| show_picker.set(true))
                                    />
                                </div>
                                {move || {
                                    let labelers =
                                        detail.get().map(|data| data.labelers).unwrap_or_default();
                                    if labelers.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No labelers in this group"
                                                description="Add labelers so they can start tagging images."
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        labelers
                                            .into_iter()
                                            .map(|labeler| {
                                                let remove_id = labeler.id;
                                                view! {
                                                    <div class="flex items-center justify-between py-2 border-b border-gray-100">
                                                        <span class="text-sm text-gray-900">
                                                            {labeler.username.clone()}
                                                        </span>
                                                        <button
                                                            class="text-red-600 hover:text-red-800 text-sm font-medium"
                                                            on:click=move |_| on_remove_member.run(remove_id)
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </div>
                        </Show>

                        // Tags tab
                        <Show when=move || active_tab.get() == "tags">
                            <div class="p-4 sm:p-6 space-y-4">
                                <div class="flex justify-end">
                                    <Button
                                        label="+ New Tag".to_owned()
                                        on_click=Callback::new(move |()| {
                                            editing_tag.set(None);
                                            tag_modal_open.set(true);
                                        })
                                    />
                                </div>
                                {move || {
                                    let tags = detail.get().map(|data| data.tags).unwrap_or_default();
                                    if tags.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No tags in this group"
                                                description="Create tags for labelers to apply to images."
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        tags.into_iter()
                                            .map(|tag| {
                                                let delete_id = tag.id;
                                                let for_edit = tag.clone();
                                                view! {
                                                    <div class="flex items-center justify-between py-2 border-b border-gray-100">
                                                        <div>
                                                            <span class="text-sm font-medium text-gray-900">
                                                                {tag.name.clone()}
                                                            </span>
                                                            <p class="text-xs text-gray-500">
                                                                {tag.description.clone().unwrap_or_default()}
                                                            </p>
                                                        </div>
                                                        <div class="space-x-3">
                                                            <button
                                                                class="text-blue-600 hover:text-blue-800 text-sm font-medium"
                                                                on:click=move |_| {
                                                                    editing_tag.set(Some(for_edit.clone()));
                                                                    tag_modal_open.set(true);
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="text-red-600 hover:text-red-800 text-sm font-medium"
                                                                on:click=move |_| on_tag_delete.run(delete_id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </div>
                        </Show>

                        // Images tab
                        <Show when=move || active_tab.get() == "images">
                            <div class="p-4 sm:p-6 space-y-4">
                                <div class="flex justify-end">
                                    <ImageUploader
                                        on_select=on_upload
                                        on_error=on_upload_error
                                        uploading=uploading
                                    />
                                </div>
                                {move || {
                                    let images =
                                        detail.get().map(|data| data.images).unwrap_or_default();
                                    if images.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No images uploaded"
                                                description="Upload PNG or JPEG images for labeling."
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                                {images
                                                    .into_iter()
                                                    .map(|image| {
                                                        let open_id = image.id;
                                                        view! {
                                                            <button
                                                                class="border border-gray-200 rounded-lg p-4 text-left hover:bg-gray-50"
                                                                on:click=move |_| open_image.run(open_id)
                                                            >
                                                                <p class="text-sm font-medium text-gray-900 truncate">
                                                                    {image.filename.clone()}
                                                                </p>
                                                                <p class="mt-1 text-xs text-gray-500">
                                                                    "Uploaded: " {image.uploaded_at.clone()}
                                                                </p>
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}
                            </div>
                        </Show>
                    </Card>
                </Show>

                <Show when=move || show_picker.get()>
                    <LabelerPickerModal
                        exclude_ids=detail.get().map(|data| member_ids(&data)).unwrap_or_default()
                        on_select=on_add_member
                        on_close=Callback::new(move |()| show_picker.set(false))
                    />
                </Show>

                <Show when=move || tag_modal_open.get()>
                    <TagModal
                        existing=editing_tag.get()
                        on_submit=on_tag_submit
                        on_close=Callback::new(move |()| {
                            tag_modal_open.set(false);
                            editing_tag.set(None);
                        })
                        busy=tag_saving
                    />
                </Show>
            </div>
        </div>
    }
}
