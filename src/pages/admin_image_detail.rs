//! Admin image detail: rendered image, tag statistics, and final tags.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tag statistics are server-computed aggregates; the 50% threshold below is
//! a presentation rule only (dashed border and warning glyph), not a gate.
//! Final tags auto-generate once when the set is empty and no admin override
//! exists; any admin toggle replaces the set and turns the override flag on.

#[cfg(test)]
#[path = "admin_image_detail_test.rs"]
mod admin_image_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::back_button::BackButton;
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::message::{ErrorMessage, SuccessMessage};
use crate::components::page_header::PageHeader;
use crate::net::api::ApiClient;
use crate::net::types::{FinalTag, ImageDetailData, TagStatistic};
use crate::util::files::image_data_url;

/// Consensus display threshold, in percent.
pub const LOW_CONSENSUS_THRESHOLD: f64 = 50.0;

/// Whether a statistic is flagged as below the consensus threshold.
pub fn below_threshold(stat: &TagStatistic) -> bool {
    stat.percentage < LOW_CONSENSUS_THRESHOLD
}

/// Whether the page should trigger the one-time auto-generation.
pub fn needs_auto_generate(detail: &ImageDetailData) -> bool {
    detail.final_tags.is_empty() && !detail.has_admin_override
}

/// Whether `tag_id` is currently in the final set.
pub fn is_final(final_tags: &[FinalTag], tag_id: i64) -> bool {
    final_tags.iter().any(|tag| tag.tag_id == tag_id)
}

/// Final tag ids after toggling `tag_id` in or out.
pub fn toggled_tag_ids(final_tags: &[FinalTag], tag_id: i64) -> Vec<i64> {
    if is_final(final_tags, tag_id) {
        final_tags.iter().map(|tag| tag.tag_id).filter(|id| *id != tag_id).collect()
    } else {
        final_tags.iter().map(|tag| tag.tag_id).chain(std::iter::once(tag_id)).collect()
    }
}

#[component]
pub fn AdminImageDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let group_id = move || {
        params.read().get("id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };
    let image_id = move || {
        params.read().get("image_id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };

    let detail = RwSignal::new(None::<ImageDetailData>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let update_error = RwSignal::new(String::new());
    let update_success = RwSignal::new(String::new());
    let updating = RwSignal::new(false);

    // Load the detail; on first sight of an empty, non-overridden final set,
    // trigger auto-generation and re-read.
    let load = Callback::new({
        let api = api.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let gid = group_id();
                let iid = image_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.image_detail(gid, iid).await) {
                        Ok(data) => {
                            if needs_auto_generate(&data) {
                                match crate::net::api::api_data(
                                    api.auto_generate_final_tags(iid).await,
                                ) {
                                    Ok(generated) => {
                                        let mut data = data;
                                        data.final_tags = generated;
                                        detail.set(Some(data));
                                    }
                                    Err(message) => {
                                        log::warn!("final tag auto-generation failed: {message}");
                                        detail.set(Some(data));
                                    }
                                }
                            } else {
                                detail.set(Some(data));
                            }
                        }
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
        let _ = params.read().get("image_id");
        load.run(());
    });

    let on_toggle = Callback::new({
        let api = api.clone();
        move |tag_id: i64| {
            if updating.get() {
                return;
            }
            let Some(current) = detail.get() else {
                return;
            };
            let tag_ids = toggled_tag_ids(&current.final_tags, tag_id);
            updating.set(true);
            update_error.set(String::new());
            update_success.set(String::new());

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let iid = image_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.override_final_tags(iid, tag_ids).await) {
                        Ok(final_tags) => {
                            detail.update(|data| {
                                if let Some(data) = data {
                                    data.final_tags = final_tags;
                                    data.has_admin_override = true;
                                }
                            });
                            update_success.set("Final tags updated successfully!".to_owned());
                        }
                        Err(message) => update_error.set(message),
                    }
                    updating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, tag_ids);
                updating.set(false);
            }
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <BackButton
                    href=format!("/admin/groups/{}", group_id())
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
                                view! {
                                    <PageHeader
                                        title=data.image.filename.clone()
                                        description=format!("Uploaded: {}", data.image.uploaded_at)
                                    />
                                }
                            })
                    }}

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <Card>
                            <div class="p-4 sm:p-6">
                                <h3 class="text-lg font-medium text-gray-900 mb-4">"Image"</h3>
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
                                <h3 class="text-lg font-medium text-gray-900 mb-4">
                                    "Tag Statistics"
                                </h3>
                                {move || {
                                    let stats = detail
                                        .get()
                                        .map(|data| data.tag_statistics)
                                        .unwrap_or_default();
                                    if stats.is_empty() {
                                        view! {
                                            <EmptyState
                                                title="No tag statistics"
                                                description="No tags are available for this group."
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <div class="space-y-3">
                                                <div class="text-xs text-gray-500 mb-2">
                                                    "Tags below 50% threshold are shown with a dashed border and warning icon"
                                                </div>
                                                {stats
                                                    .into_iter()
                                                    .map(|stat| {
                                                        let flagged = below_threshold(&stat);
                                                        let unused = stat.count == 0;
                                                        let row_class = if flagged {
                                                            "rounded-lg p-3 bg-yellow-50 border border-dashed border-yellow-200"
                                                        } else {
                                                            "rounded-lg p-3 bg-gray-50"
                                                        };
                                                        let bar_class = if flagged {
                                                            "h-2 rounded-full bg-yellow-500"
                                                        } else {
                                                            "h-2 rounded-full bg-blue-600"
                                                        };
                                                        let width = format!("width: {}%", stat.percentage);
                                                        view! {
                                                            <div class=row_class>
                                                                <div class="flex justify-between items-center mb-2">
                                                                    <div class="flex items-center gap-2">
                                                                        <span class="text-sm font-medium text-gray-900">
                                                                            {stat.tag_name.clone()}
                                                                        </span>
                                                                        <Show when=move || flagged>
                                                                            <span
                                                                                class="text-xs text-yellow-600"
                                                                                title="Below 50% threshold"
                                                                            >
                                                                                "\u{26a0}"
                                                                            </span>
                                                                        </Show>
                                                                        <Show when=move || unused>
                                                                            <span
                                                                                class="text-xs text-gray-400"
                                                                                title="No labelers used this tag"
                                                                            >
                                                                                "\u{25cb}"
                                                                            </span>
                                                                        </Show>
                                                                    </div>
                                                                    <span class="text-sm text-gray-500">
                                                                        {format!(
                                                                            "{}/{} labelers",
                                                                            stat.count,
                                                                            stat.total_labelers,
                                                                        )}
                                                                    </span>
                                                                </div>
                                                                <div class="w-full bg-gray-200 rounded-full h-2">
                                                                    <div class=bar_class style=width></div>
                                                                </div>
                                                                <div class="text-xs text-gray-500 mt-1">
                                                                    {format!("{:.1}%", stat.percentage)}
                                                                    <Show when=move || flagged>
                                                                        <span class="ml-1 text-yellow-600">
                                                                            "(below threshold)"
                                                                        </span>
                                                                    </Show>
                                                                </div>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_any()
                                    }
                                }}
                            </div>
                        </Card>
                    </div>

                    <Card class="mt-6".to_owned()>
                        <div class="p-4 sm:p-6">
                            <div class="flex flex-col sm:flex-row sm:justify-between sm:items-center mb-4">
                                <h3 class="text-lg font-medium text-gray-900">
                                    "Final Tags "
                                    <Show when=move || {
                                        detail.get().is_some_and(|data| data.has_admin_override)
                                    }>
                                        <span class="text-sm text-orange-600">"(Admin Override)"</span>
                                    </Show>
                                </h3>
                                <div class="text-sm text-gray-500">
                                    "Click tags to toggle them as final tags"
                                </div>
                            </div>
                            <ErrorMessage message=update_error/>
                            <SuccessMessage message=update_success/>
                            {move || {
                                let data = detail.get();
                                let stats =
                                    data.as_ref().map(|d| d.tag_statistics.clone()).unwrap_or_default();
                                let final_tags =
                                    data.map(|d| d.final_tags).unwrap_or_default();
                                if stats.is_empty() {
                                    view! {
                                        <EmptyState
                                            title="No tags available"
                                            description="No tags are available for this group."
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <div class="flex flex-wrap gap-2">
                                            {stats
                                                .into_iter()
                                                .map(|stat| {
                                                    let selected = is_final(&final_tags, stat.tag_id);
                                                    let flagged = below_threshold(&stat);
                                                    let tag_id = stat.tag_id;
                                                    let class = if selected {
                                                        "px-3 py-2 rounded-full text-sm font-medium bg-green-100 text-green-800 border-2 border-green-300"
                                                    } else if flagged {
                                                        "px-3 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-600 border-2 border-dashed border-gray-300 hover:bg-gray-200"
                                                    } else {
                                                        "px-3 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-800 border-2 border-gray-200 hover:bg-gray-200"
                                                    };
                                                    view! {
                                                        <button
                                                            class=class
                                                            disabled=move || updating.get()
                                                            on:click=move |_| on_toggle.run(tag_id)
                                                        >
                                                            {stat.tag_name.clone()}
                                                            <Show when=move || selected>
                                                                <span class="ml-1 text-green-600">"\u{2713}"</span>
                                                            </Show>
                                                            <Show when=move || flagged && !selected>
                                                                <span class="ml-1 text-gray-400">"\u{26a0}"</span>
                                                            </Show>
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
                    </Card>
                </Show>
            </div>
        </div>
    }
}
