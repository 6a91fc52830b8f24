//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api::{API_BASE, ApiClient};
use crate::net::types::Role;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_group_detail::AdminGroupDetailPage,
    admin_groups::AdminGroupsPage, admin_image_detail::AdminImageDetailPage,
    admin_labelers::AdminLabelersPage, home::HomePage,
    labeler_group_detail::LabelerGroupDetailPage, labeler_groups::LabelerGroupsPage,
    labeler_image::LabelerImagePage, login::LoginPage,
};
use crate::state::auth::{AuthState, restore_into};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and the API client, then sets up
/// client-side routing with role-gated admin and labeler trees.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(ApiClient::new(API_BASE, move || auth.get_untracked().token));

    // Pick the stored session back up on first client render.
    Effect::new(move || {
        restore_into(auth, &BrowserStorage);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/labelboard.css"/>
        <Title text="Image Labeling Platform"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Admin fallback="/login">
                            <AdminDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("labelers"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Admin fallback="/login">
                            <AdminLabelersPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("groups"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Admin fallback="/login">
                            <AdminGroupsPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("groups"), ParamSegment("id"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Admin fallback="/login">
                            <AdminGroupDetailPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("groups"),
                        ParamSegment("id"),
                        StaticSegment("image"),
                        ParamSegment("image_id"),
                    )
                    view=|| view! {
                        <ProtectedRoute required=Role::Admin fallback="/login">
                            <AdminImageDetailPage/>
                        </ProtectedRoute>
                    }
                />

                <Route
                    path=(StaticSegment("labeler"), StaticSegment("groups"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Labeler fallback="/login">
                            <LabelerGroupsPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("labeler"), StaticSegment("groups"), ParamSegment("id"))
                    view=|| view! {
                        <ProtectedRoute required=Role::Labeler fallback="/login">
                            <LabelerGroupDetailPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(
                        StaticSegment("labeler"),
                        StaticSegment("groups"),
                        ParamSegment("id"),
                        StaticSegment("images"),
                        ParamSegment("image_id"),
                    )
                    view=|| view! {
                        <ProtectedRoute required=Role::Labeler fallback="/login">
                            <LabelerImagePage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
