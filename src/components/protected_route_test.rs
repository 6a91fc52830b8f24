use super::*;
use crate::net::types::User;

fn admin_user() -> User {
    User { id: 1, username: "root".to_owned(), role: Role::Admin }
}

#[test]
fn loading_session_defers_the_decision() {
    let state = AuthState::default();
    assert_eq!(guard_decision(&state, Role::Admin), GuardDecision::Loading);
}

#[test]
fn anonymous_visitor_is_denied_with_login_message() {
    let state = AuthState::anonymous();
    assert_eq!(guard_decision(&state, Role::Admin), GuardDecision::Denied(LOGIN_REQUIRED));
}

#[test]
fn wrong_role_is_denied_with_permission_message() {
    let state = AuthState::authenticated("tok".to_owned(), admin_user());
    assert_eq!(guard_decision(&state, Role::Labeler), GuardDecision::Denied(ROLE_MISMATCH));
}

#[test]
fn matching_role_is_authorized() {
    let state = AuthState::authenticated("tok".to_owned(), admin_user());
    assert_eq!(guard_decision(&state, Role::Admin), GuardDecision::Authorized);
}
