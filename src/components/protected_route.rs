//! Role-gated wrapper around a route tree.
//!
//! DESIGN
//! ======
//! The gate is a pure function of the session state and one required role;
//! the component only maps its three outcomes onto a spinner, a denial card
//! with a delayed redirect, or the children.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Seconds a denied visitor sees the message before being redirected.
pub const DENIAL_REDIRECT_SECS: u64 = 5;

const LOGIN_REQUIRED: &str = "Please log in to access this page.";
const ROLE_MISMATCH: &str = "You don't have permission to access this page.";

/// Outcome of the route gate for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth status unknown; the stored session is still being restored.
    Loading,
    /// Not allowed in; carries the message to display.
    Denied(&'static str),
    Authorized,
}

/// Gate a route tree on an authenticated user with `required` role.
pub fn guard_decision(state: &AuthState, required: Role) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match &state.user {
        None => GuardDecision::Denied(LOGIN_REQUIRED),
        Some(user) if user.role != required => GuardDecision::Denied(ROLE_MISMATCH),
        Some(_) => GuardDecision::Authorized,
    }
}

#[component]
pub fn ProtectedRoute(
    required: Role,
    #[prop(default = "/")] fallback: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard_decision(&auth.get(), required));

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        Effect::new(move || {
            if matches!(decision.get(), GuardDecision::Denied(_)) {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(
                        DENIAL_REDIRECT_SECS,
                    ))
                    .await;
                    navigate(fallback, NavigateOptions::default());
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = fallback;

    view! {
        {move || match decision.get() {
            GuardDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
            GuardDecision::Denied(message) => view! {
                <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                    <div class="max-w-md w-full bg-white shadow-lg rounded-lg p-6 text-center">
                        <h2 class="text-xl font-semibold text-gray-900 mb-2">"Access Denied"</h2>
                        <p class="text-gray-600 mb-4">{message}</p>
                        <p class="text-sm text-gray-500">"Redirecting shortly..."</p>
                    </div>
                </div>
            }
            .into_any(),
            GuardDecision::Authorized => children().into_any(),
        }}
    }
}
