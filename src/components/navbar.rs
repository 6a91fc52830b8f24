//! Top navigation bar with role-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::{AuthState, logout};
use crate::util::storage::BrowserStorage;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(auth, &BrowserStorage);
        navigate("/login", NavigateOptions::default());
    };

    let role = move || auth.get().role();
    let username = move || auth.get().user.map(|user| user.username).unwrap_or_default();

    view! {
        <nav class="bg-white shadow-lg border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center space-x-2 text-gray-800 hover:text-blue-600">
                        <span class="font-bold text-xl">"Image Labeling"</span>
                    </a>
                    <div class="flex items-center space-x-4">
                        {move || match role() {
                            Some(Role::Admin) => view! {
                                <a href="/admin/labelers" class="text-gray-600 hover:text-blue-600 text-sm font-medium">
                                    "Manage Labelers"
                                </a>
                                <a href="/admin/groups" class="text-gray-600 hover:text-blue-600 text-sm font-medium">
                                    "Manage Groups"
                                </a>
                            }
                            .into_any(),
                            Some(Role::Labeler) => view! {
                                <a href="/labeler/groups" class="text-gray-600 hover:text-blue-600 text-sm font-medium">
                                    "My Groups"
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <a href="/login" class="text-gray-600 hover:text-blue-600 text-sm font-medium">
                                    "Login"
                                </a>
                            }
                            .into_any(),
                        }}
                        <Show when=move || auth.get().is_authenticated()>
                            <span class="text-sm text-gray-500">
                                "Welcome, " {username}
                            </span>
                            <button
                                class="text-sm font-medium text-red-600 hover:text-red-800"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
