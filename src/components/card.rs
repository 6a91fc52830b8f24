//! White panel card wrapping page content sections.

use leptos::prelude::*;

/// Scrollable content card. `hover` adds a shadow transition for clickable
/// cards (group grids).
#[component]
pub fn Card(
    #[prop(optional)] hover: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "bg-white shadow rounded-lg overflow-y-auto {}{class}",
        if hover { "hover:shadow-lg transition-shadow duration-200 " } else { "" },
    );
    view! { <div class=class>{children()}</div> }
}
