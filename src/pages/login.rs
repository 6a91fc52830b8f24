//! Login page with username/password and a role selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one unauthenticated form. On success the session store settles
//! authenticated and the page navigates to the role's home; on failure the
//! store stays anonymous and the banner text follows the failure kind.
//! A visitor who already has a live session is bounced straight home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::message::ErrorMessage;
use crate::net::types::Role;
use crate::state::auth::{AuthState, role_home};
use crate::util::auth::install_authenticated_redirect;

/// Required-field check run before the login call.
pub fn validate_login_form(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        Err("Please enter both username and password.")
    } else {
        Ok(())
    }
}

/// Role as submitted by the `<select>`; anything unexpected falls back to
/// the labeler default.
pub fn role_from_value(value: &str) -> Role {
    if value == "admin" { Role::Admin } else { Role::Labeler }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<crate::net::api::ApiClient>();
    let navigate = use_navigate();
    install_authenticated_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Labeler);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(message) = validate_login_form(&username.get(), &password.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::login(
                    &api,
                    &crate::util::storage::BrowserStorage,
                    auth,
                    username.get_untracked().trim().to_owned(),
                    password.get_untracked(),
                    role.get_untracked(),
                )
                .await;
                busy.set(false);
                match result {
                    Ok(role) => {
                        navigate(role_home(role), leptos_router::NavigateOptions::default());
                    }
                    Err(failure) => error.set(failure.message().to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &api);
            busy.set(false);
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-6 sm:p-8">
                <h1 class="text-2xl font-bold text-gray-900 text-center mb-6">
                    "Sign in to Image Labeling"
                </h1>
                <ErrorMessage message=error/>
                <form class="space-y-4" on:submit=on_submit>
                    <FormInput label="Username" value=username placeholder="username"/>
                    <FormInput
                        label="Password"
                        value=password
                        input_type="password"
                        placeholder="password"
                    />
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Role"</label>
                        <select
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| role.set(role_from_value(&event_target_value(&ev)))
                        >
                            <option value="labeler">"Labeler"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </div>
                    <button
                        type="submit"
                        class="w-full px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700 disabled:bg-blue-300 disabled:cursor-not-allowed"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
