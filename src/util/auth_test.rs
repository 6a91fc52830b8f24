use super::*;
use crate::net::types::{Role, User};

fn authed(role: Role) -> AuthState {
    AuthState::authenticated(
        "tok-1".to_owned(),
        User { id: 1, username: "kim".to_owned(), role },
    )
}

#[test]
fn admin_session_redirects_to_admin_dashboard() {
    assert_eq!(authenticated_redirect_target(&authed(Role::Admin)), Some("/admin/dashboard"));
}

#[test]
fn labeler_session_redirects_to_labeler_groups() {
    assert_eq!(authenticated_redirect_target(&authed(Role::Labeler)), Some("/labeler/groups"));
}

#[test]
fn anonymous_visitor_stays_put() {
    assert_eq!(authenticated_redirect_target(&AuthState::anonymous()), None);
}

#[test]
fn no_redirect_while_auth_is_pending() {
    assert_eq!(authenticated_redirect_target(&AuthState::default()), None);
}
