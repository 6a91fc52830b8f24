//! Admin dashboard: account/group counts and the bulk export action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two counts load concurrently; the branches populate independent
//! slots, so one failing leaves the other's number standing and only adds
//! its own line to the error banner.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::message::ErrorMessage;
use crate::components::page_header::PageHeader;

/// Fold the two fan-out branches into the panel numbers. A failed branch
/// keeps its count at zero and contributes one error line.
pub fn merge_count_results(
    labelers: Result<i64, String>,
    groups: Result<i64, String>,
) -> (i64, i64, Vec<String>) {
    let mut errors = Vec::new();
    let labeler_count = labelers.unwrap_or_else(|message| {
        errors.push(format!("Failed to load labelers: {message}"));
        0
    });
    let group_count = groups.unwrap_or_else(|message| {
        errors.push(format!("Failed to load groups: {message}"));
        0
    });
    (labeler_count, group_count, errors)
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<crate::net::api::ApiClient>();

    let labeler_count = RwSignal::new(0_i64);
    let group_count = RwSignal::new(0_i64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let export_error = RwSignal::new(String::new());
    let exporting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let (labelers, groups) =
                futures::join!(api.list_labelers(), api.list_groups());
            let labelers = crate::net::api::api_data(labelers).map(|data| data.total);
            let groups = crate::net::api::api_data(groups).map(|data| data.total);
            let (labeler_total, group_total, errors) = merge_count_results(labelers, groups);
            labeler_count.set(labeler_total);
            group_count.set(group_total);
            error.set(errors.join(" "));
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let on_export = move |_| {
        if exporting.get() {
            return;
        }
        exporting.set(true);
        export_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::api_data(api.export_bulk().await) {
                    Ok(value) => {
                        let filename = crate::util::files::export_filename(
                            &crate::util::files::current_date_iso(),
                        );
                        crate::util::files::download_json(&value, &filename);
                    }
                    Err(message) => {
                        export_error.set(format!("Failed to export data: {message}"));
                    }
                }
                exporting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
            exporting.set(false);
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <PageHeader
                    title="Admin Dashboard"
                    description="Manage labelers, groups, and exports"
                />
                <ErrorMessage message=error/>
                <ErrorMessage message=export_error/>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    <a href="/admin/labelers">
                        <Card hover=true>
                            <div class="p-6">
                                <h3 class="text-lg font-medium text-gray-900">"Labelers"</h3>
                                <p class="mt-2 text-3xl font-bold text-blue-600">
                                    {move || if loading.get() { "...".to_owned() } else { labeler_count.get().to_string() }}
                                </p>
                                <p class="mt-2 text-sm text-gray-600">
                                    "Create accounts, assign groups, and manage labeler access"
                                </p>
                            </div>
                        </Card>
                    </a>
                    <a href="/admin/groups">
                        <Card hover=true>
                            <div class="p-6">
                                <h3 class="text-lg font-medium text-gray-900">"Groups"</h3>
                                <p class="mt-2 text-3xl font-bold text-blue-600">
                                    {move || if loading.get() { "...".to_owned() } else { group_count.get().to_string() }}
                                </p>
                                <p class="mt-2 text-sm text-gray-600">
                                    "Create and organize labeling groups for different tasks"
                                </p>
                            </div>
                        </Card>
                    </a>
                </div>

                <div class="mt-8">
                    <Card>
                        <div class="p-6 flex flex-col sm:flex-row sm:items-center sm:justify-between">
                            <div>
                                <h3 class="text-lg font-medium text-gray-900">"Bulk Export"</h3>
                                <p class="mt-1 text-sm text-gray-600">
                                    "Download all groups, labelers, tags, and images as JSON"
                                </p>
                            </div>
                            <button
                                type="button"
                                class="mt-4 sm:mt-0 px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-300"
                                disabled=move || exporting.get()
                                on:click=on_export
                            >
                                {move || if exporting.get() { "Exporting..." } else { "Export Data" }}
                            </button>
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}
