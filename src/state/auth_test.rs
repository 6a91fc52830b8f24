use super::*;
use crate::util::storage::MemoryStorage;

fn make_user() -> User {
    User { id: 3, username: "kim".to_owned(), role: Role::Labeler }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn default_state_is_authenticating() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.phase(), SessionPhase::Authenticating);
}

#[test]
fn anonymous_state_has_nothing() {
    let state = AuthState::anonymous();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn authenticated_state_holds_token_and_user_together() {
    let state = AuthState::authenticated("tok-1".to_owned(), make_user());
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Labeler));
}

#[test]
fn anonymous_state_has_no_role() {
    assert_eq!(AuthState::anonymous().role(), None);
    assert!(!AuthState::anonymous().is_authenticated());
}

#[test]
fn authenticating_state_is_not_authenticated() {
    let state = AuthState::authenticating();
    assert_eq!(state.phase(), SessionPhase::Authenticating);
    assert!(!state.is_authenticated());
}

#[test]
fn role_home_routes_by_role() {
    assert_eq!(role_home(Role::Admin), "/admin/dashboard");
    assert_eq!(role_home(Role::Labeler), "/labeler/groups");
}

// =============================================================
// Persistence round trips
// =============================================================

#[test]
fn persisted_session_restores_intact() {
    let storage = MemoryStorage::default();
    let user = make_user();
    persist_session(&storage, "tok-1", &user);

    let (token, restored) = restore_session(&storage).expect("session should restore");
    assert_eq!(token, "tok-1");
    assert_eq!(restored, user);
}

#[test]
fn restore_of_empty_storage_is_anonymous() {
    let storage = MemoryStorage::default();
    assert_eq!(restore_session(&storage), None);
}

#[test]
fn malformed_user_json_is_discarded_and_keys_cleared() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, "{not json");

    assert_eq!(restore_session(&storage), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn user_json_with_wrong_shape_is_discarded() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, r#"{"id": "not-a-number", "username": "kim", "role": "labeler"}"#);

    assert_eq!(restore_session(&storage), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn token_without_user_is_cleared() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");

    assert_eq!(restore_session(&storage), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn user_without_token_is_cleared() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, r#"{"id": 3, "username": "kim", "role": "labeler"}"#);

    assert_eq!(restore_session(&storage), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn clear_after_persist_leaves_no_residual_keys() {
    let storage = MemoryStorage::default();
    persist_session(&storage, "tok-1", &make_user());
    clear_session(&storage);

    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(restore_session(&storage), None);
}

// =============================================================
// Login failure classification
// =============================================================

fn http_error(status: u16) -> ApiError {
    ApiError::Http { status, status_text: String::new(), body: String::new() }
}

#[test]
fn forbidden_login_is_a_credentials_failure() {
    assert_eq!(classify_login_error(&http_error(403)), LoginFailure::Credentials);
}

#[test]
fn internal_error_login_is_a_server_failure() {
    assert_eq!(classify_login_error(&http_error(500)), LoginFailure::Server);
}

#[test]
fn other_statuses_are_network_failures() {
    assert_eq!(classify_login_error(&http_error(404)), LoginFailure::Network);
    assert_eq!(classify_login_error(&http_error(502)), LoginFailure::Network);
}

#[test]
fn transport_errors_are_network_failures() {
    let error = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(classify_login_error(&error), LoginFailure::Network);
}

#[test]
fn failure_messages_are_distinct() {
    let messages = [
        LoginFailure::Credentials.message(),
        LoginFailure::Server.message(),
        LoginFailure::Network.message(),
    ];
    assert!(messages.iter().all(|m| !m.is_empty()));
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
}

// =============================================================
// Session assembly
// =============================================================

#[test]
fn session_from_login_combines_response_and_form() {
    let data = LoginData { user_id: 42, token: "tok-9".to_owned() };
    let (token, user) = session_from_login(data, "ada".to_owned(), Role::Admin);

    assert_eq!(token, "tok-9");
    assert_eq!(user, User { id: 42, username: "ada".to_owned(), role: Role::Admin });
}
