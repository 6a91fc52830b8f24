//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page and the landing route both bounce a signed-in visitor to
//! the home screen for their role; the decision lives here so they agree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, role_home};

/// Where to bounce an already-authenticated visitor, if anywhere.
pub fn authenticated_redirect_target(state: &AuthState) -> Option<&'static str> {
    match (state.is_authenticated(), state.role()) {
        (true, Some(role)) => Some(role_home(role)),
        _ => None,
    }
}

/// Redirect to the role home whenever a live session appears.
pub fn install_authenticated_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if let Some(target) = authenticated_redirect_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
