//! Group management: card grid, create, delete, click-through to detail.

#[cfg(test)]
#[path = "admin_groups_test.rs"]
mod admin_groups_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::form_input::FormInput;
use crate::components::message::{ErrorMessage, SuccessMessage};
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::net::api::ApiClient;
use crate::net::types::{CreateGroupRequest, Group};

/// Build the create body from the form fields, requiring a name. The
/// description is omitted when blank.
pub fn build_create_group_request(
    name: &str,
    description: &str,
) -> Result<CreateGroupRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Group name is required.");
    }
    let description = description.trim();
    Ok(CreateGroupRequest {
        name: name.to_owned(),
        description: if description.is_empty() { None } else { Some(description.to_owned()) },
    })
}

#[component]
pub fn AdminGroupsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let groups = RwSignal::new(Vec::<Group>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Group>);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.list_groups().await) {
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
        }
    });
    reload.run(());

    let on_create = Callback::new({
        let api = api.clone();
        move |()| {
            if saving.get() {
                return;
            }
            let request = match build_create_group_request(&new_name.get(), &new_description.get())
            {
                Ok(request) => request,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            saving.set(true);
            error.set(String::new());

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.create_group(&request).await) {
                        Ok(created) => {
                            success.set(format!("Group \"{}\" created.", created.name));
                            show_create.set(false);
                            new_name.set(String::new());
                            new_description.set(String::new());
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, request);
                saving.set(false);
            }
        }
    });

    let on_delete = Callback::new({
        let api = api.clone();
        move |()| {
            let Some(target) = delete_target.get() else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_message(api.delete_group(target.id).await) {
                        Ok(_) => {
                            success.set(format!("Group \"{}\" deleted.", target.name));
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                    delete_target.set(None);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, target);
                delete_target.set(None);
            }
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between">
                    <PageHeader
                        title="Manage Groups"
                        description="Organize labeling work into groups"
                    />
                    <Button
                        label="+ New Group".to_owned()
                        on_click=Callback::new(move |()| {
                            show_create.set(true);
                            new_name.set(String::new());
                            new_description.set(String::new());
                        })
                    />
                </div>
                <ErrorMessage message=error/>
                <SuccessMessage message=success/>

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
                                title="No groups yet"
                                description="Create a group to start organizing labeling work."
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
                                            let for_delete = group.clone();
                                            view! {
                                                <Card hover=true>
                                                    <div
                                                        class="p-6 cursor-pointer"
                                                        on:click=move |_| {
                                                            navigate(
                                                                &format!("/admin/groups/{open_id}"),
                                                                NavigateOptions::default(),
                                                            );
                                                        }
                                                    >
                                                        <div class="flex items-start justify-between">
                                                            <h3 class="text-lg font-medium text-gray-900">
                                                                {group.name.clone()}
                                                            </h3>
                                                            <button
                                                                class="text-red-600 hover:text-red-800 text-sm font-medium"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    delete_target.set(Some(for_delete.clone()));
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
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

                <Show when=move || show_create.get()>
                    <Modal
                        title="Create Group"
                        on_close=Callback::new(move |()| show_create.set(false))
                    >
                        <div class="space-y-4">
                            <FormInput label="Group Name" value=new_name placeholder="e.g. street scenes"/>
                            <FormInput
                                label="Description (optional)"
                                value=new_description
                                rows=3
                            />
                            <div class="flex justify-end space-x-3">
                                <Button
                                    label="Cancel".to_owned()
                                    variant=ButtonVariant::Secondary
                                    on_click=Callback::new(move |()| show_create.set(false))
                                />
                                <Button
                                    label=Signal::derive(move || {
                                        if saving.get() { "Creating...".to_owned() } else { "Create".to_owned() }
                                    })
                                    disabled=saving
                                    on_click=on_create
                                />
                            </div>
                        </div>
                    </Modal>
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    <Modal
                        title="Delete Group"
                        on_close=Callback::new(move |()| delete_target.set(None))
                    >
                        <div class="space-y-4">
                            <p class="text-sm text-gray-600">
                                "Delete group \""
                                {move || delete_target.get().map(|g| g.name).unwrap_or_default()}
                                "\"? Its tags and images will no longer be reachable."
                            </p>
                            <div class="flex justify-end space-x-3">
                                <Button
                                    label="Cancel".to_owned()
                                    variant=ButtonVariant::Secondary
                                    on_click=Callback::new(move |()| delete_target.set(None))
                                />
                                <Button
                                    label="Delete".to_owned()
                                    variant=ButtonVariant::Danger
                                    on_click=on_delete
                                />
                            </div>
                        </div>
                    </Modal>
                </Show>
            </div>
        </div>
    }
}
