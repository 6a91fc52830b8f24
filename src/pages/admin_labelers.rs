//! Labeler account management: list, create, delete.

#[cfg(test)]
#[path = "admin_labelers_test.rs"]
mod admin_labelers_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::components::form_input::FormInput;
use crate::components::message::{ErrorMessage, SuccessMessage};
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::table::Table;
use crate::net::api::ApiClient;
use crate::net::types::Labeler;

/// Required-field check for the create form.
pub fn validate_new_labeler(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        Err("Username and password are both required.")
    } else {
        Ok(())
    }
}

#[component]
pub fn AdminLabelersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let labelers = RwSignal::new(Vec::<Labeler>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let show_create = RwSignal::new(false);
    let new_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Labeler>);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::api_data(api.list_labelers().await) {
                        Ok(data) => labelers.set(data.labelers),
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
            if let Err(message) = validate_new_labeler(&new_username.get(), &new_password.get()) {
                error.set(message.to_owned());
                return;
            }
            saving.set(true);
            error.set(String::new());

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let request = crate::net::types::CreateLabelerRequest {
                        username: new_username.get_untracked().trim().to_owned(),
                        password: new_password.get_untracked(),
                        group_ids: None,
                    };
                    match crate::net::api::api_data(api.create_labeler(&request).await) {
                        Ok(created) => {
                            success.set(format!("Labeler \"{}\" created.", created.username));
                            show_create.set(false);
                            new_username.set(String::new());
                            new_password.set(String::new());
                            reload.run(());
                        }
                        Err(message) => error.set(message),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
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
                    match crate::net::api::api_message(api.delete_labeler(target.id).await) {
                        Ok(_) => {
                            success.set(format!("Labeler \"{}\" deleted.", target.username));
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
                        title="Manage Labelers"
                        description="Create accounts and control group membership"
                    />
                    <Button
                        label="+ New Labeler".to_owned()
                        on_click=Callback::new(move |()| {
                            show_create.set(true);
                            new_username.set(String::new());
                            new_password.set(String::new());
                        })
                    />
                </div>
                <ErrorMessage message=error/>
                <SuccessMessage message=success/>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="text-gray-600">"Loading..."</p> }
                >
                    <Show
                        when=move || !labelers.get().is_empty()
                        fallback=|| view! {
                            <EmptyState
                                title="No labelers yet"
                                description="Create a labeler account to get started."
                            />
                        }
                    >
                        <Table headers=vec!["ID", "Username", "Groups", ""]>
                            {move || {
                                labelers
                                    .get()
                                    .into_iter()
                                    .map(|labeler| {
                                        let for_delete = labeler.clone();
                                        view! {
                                            <tr>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                    {labeler.id}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                    {labeler.username.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                    {labeler.group_ids.len()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                                    <button
                                                        class="text-red-600 hover:text-red-800 font-medium"
                                                        on:click=move |_| delete_target.set(Some(for_delete.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Table>
                    </Show>
                </Show>

                <Show when=move || show_create.get()>
                    <Modal
                        title="Create Labeler"
                        on_close=Callback::new(move |()| show_create.set(false))
                    >
                        <div class="space-y-4">
                            <FormInput label="Username" value=new_username placeholder="username"/>
                            <FormInput
                                label="Password"
                                value=new_password
                                input_type="password"
                                placeholder="password"
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
                        title="Delete Labeler"
                        on_close=Callback::new(move |()| delete_target.set(None))
                    >
                        <div class="space-y-4">
                            <p class="text-sm text-gray-600">
                                "Delete labeler \""
                                {move || delete_target.get().map(|l| l.username).unwrap_or_default()}
                                "\"? This cannot be undone."
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
