//! Labeler group view: progress bar plus pending and completed images.

#[cfg(test)]
#[path = "labeler_group_detail_test.rs"]
mod labeler_group_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::back_button::BackButton;
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::message::ErrorMessage;
use crate::components::page_header::PageHeader;
use crate::net::api::ApiClient;
use crate::net::types::{ImageStatus, LabelerImage};

/// Labeling progress over one group's images.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    pub percentage: f64,
}

/// Aggregate per-image status into the progress panel numbers.
pub fn progress(images: &[LabelerImage]) -> Progress {
    let total = images.len();
    let done = images.iter().filter(|image| image.status == ImageStatus::Done).count();
    let pending = total - done;
    #[allow(clippy::cast_precision_loss)]
    let percentage = if total == 0 { 0.0 } else { done as f64 / total as f64 * 100.0 };
    Progress { total, done, pending, percentage }
}

/// Images with `status`, preserving server order.
pub fn with_status(images: &[LabelerImage], status: ImageStatus) -> Vec<LabelerImage> {
    images.iter().filter(|image| image.status == status).cloned().collect()
}

#[component]
pub fn LabelerGroupDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let group_id = move || {
        params.read().get("id").and_then(|id| id.parse::<i64>().ok()).unwrap_or_default()
    };

    let images = RwSignal::new(Vec::<LabelerImage>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let id = group_id();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.labeler_group_images(id).await) {
                        Ok(data) => images.set(data.images),
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
        load.run(());
    });

    let open_image = Callback::new(move |image_id: i64| {
        navigate(
            &format!("/labeler/groups/{}/images/{image_id}", group_id()),
            NavigateOptions::default(),
        );
    });

    let image_section = move |status: ImageStatus, heading: &'static str| {
        let section = with_status(&images.get(), status);
        if section.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="mt-6">
                <h3 class="text-lg font-medium text-gray-900 mb-3">
                    {format!("{heading} ({})", section.len())}
                </h3>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {section
                        .into_iter()
                        .map(|image| {
                            let open_id = image.id;
                            let badge = match image.status {
                                ImageStatus::Done => ("Done", "text-green-700 bg-green-100"),
                                ImageStatus::Pending => ("Pending", "text-yellow-700 bg-yellow-100"),
                            };
                            view! {
                                <button
                                    class="border border-gray-200 rounded-lg p-4 text-left hover:bg-gray-50 bg-white"
                                    on:click=move |_| open_image.run(open_id)
                                >
                                    <div class="flex items-center justify-between">
                                        <p class="text-sm font-medium text-gray-900 truncate">
                                            {image.filename.clone()}
                                        </p>
                                        <span class=format!(
                                            "ml-2 px-2 py-0.5 rounded-full text-xs font-medium {}",
                                            badge.1,
                                        )>{badge.0}</span>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <BackButton href="/labeler/groups" label="Back to My Groups"/>
                <PageHeader title="Group Images" description="Label every pending image"/>
                <ErrorMessage message=error/>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="text-gray-600">"Loading..."</p> }
                >
                    <Show
                        when=move || !images.get().is_empty()
                        fallback=|| view! {
                            <EmptyState
                                title="No images in this group"
                                description="An administrator has not uploaded any images yet."
                            />
                        }
                    >
                        <Card>
                            <div class="p-4 sm:p-6">
                                {move || {
                                    let stats = progress(&images.get());
                                    view! {
                                        <div class="flex items-center justify-between mb-2">
                                            <span class="text-sm font-medium text-gray-900">
                                                "Progress"
                                            </span>
                                            <span class="text-sm text-gray-500">
                                                {format!("{}/{}", stats.done, stats.total)}
                                            </span>
                                        </div>
                                        <div class="w-full bg-gray-200 rounded-full h-2">
                                            <div
                                                class="h-2 rounded-full bg-blue-600"
                                                style=format!("width: {}%", stats.percentage)
                                            ></div>
                                        </div>
                                    }
                                }}
                            </div>
                        </Card>

                        {move || image_section(ImageStatus::Pending, "Pending Images")}
                        {move || image_section(ImageStatus::Done, "Completed Images")}
                    </Show>
                </Show>
            </div>
        </div>
    }
}
