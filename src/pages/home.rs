//! Landing route: bounce visitors to their role home or the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::AuthState;
use crate::util::auth::authenticated_redirect_target;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = authenticated_redirect_target(&state).unwrap_or("/login");
        navigate(target, NavigateOptions::default());
    });

    view! { <LoadingSpinner/> }
}
