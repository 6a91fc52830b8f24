//! Labeler home: the groups this labeler belongs to.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::message::ErrorMessage;
use crate::components::page_header::PageHeader;
use crate::net::api::ApiClient;
use crate::net::types::Group;

#[component]
pub fn LabelerGroupsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let groups = RwSignal::new(Vec::<Group>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::api_data(api.labeler_groups().await) {
                Ok(data) => groups.set(data.groups),
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

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <PageHeader
                    title="My Groups"
                    description="Pick a group to start labeling its images"
                />
                <ErrorMessage message=error/>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="text-gray-600">"Loading..."</p> }
                >
                    {
                        let navigate = navigate.clone();
                        view! {
                    <Show
                        when=move || !groups.get().is_empty()
                        fallback=|| view! {
                            <EmptyState
                                title="No groups assigned"
                                description="An administrator needs to add you to a group first."
                            />
                        }
                    >
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {
                                let navigate = navigate.clone();
                                move || {
                                    let navigate = navigate.clone();
                                    groups
                                        .get()
                                        .into_iter()
                                        .map(|group| {
                                            let navigate = navigate.clone();
                                            let open_id = group.id;
                                            view! {
                                                <Card hover=true>
                                                    <div
                                                        class="p-6 cursor-pointer"
                                                        on:click=move |_| {
                                                            navigate(
                                                                &format!("/labeler/groups/{open_id}"),
                                                                NavigateOptions::default(),
                                                            );
                                                        }
                                                    >
                                                        <h3 class="text-lg font-medium text-gray-900">
                                                            {group.name.clone()}
                                                        </h3>
                                                        <p class="mt-2 text-sm text-gray-600">
                                                            {group.description.clone().unwrap_or_default()}
                                                        </p>
                                                    </div>
                                                </Card>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </div>
                    </Show>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
