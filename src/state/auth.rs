//! Auth-session state for the current browser user.
//!
//! DESIGN
//! ======
//! The session is an explicit store: a single `RwSignal<AuthState>` provided
//! via context, mutated only by `login`, `logout`, and `restore_into`. Token
//! and user are always set and cleared together; a token without an identity
//! (or the reverse) never exists, in memory or in storage.
//!
//! Persistence goes through the `KeyValueStorage` port under two paired
//! keys. A half-present or undecodable stored session is dropped and its
//! keys cleared, leaving the store anonymous.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{LoginData, LoginRequest, Role, User};
use crate::util::storage::KeyValueStorage;

/// Local-storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Local-storage key holding the serialized user.
pub const USER_KEY: &str = "auth_user";

/// Authentication state tracking the current user, token, and progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while the stored session is being restored or a login call is
    /// in flight.
    pub loading: bool,
}

impl Default for AuthState {
    /// Auth status is unknown until the stored session has been inspected,
    /// so the store starts in the loading state.
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

/// The three session lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No token; nothing pending.
    Anonymous,
    /// Restore or login in flight.
    Authenticating,
    /// Token and user both present.
    Authenticated,
}

impl AuthState {
    /// Settled state with no session.
    pub fn anonymous() -> Self {
        Self { user: None, token: None, loading: false }
    }

    /// Transient state while a login call is in flight.
    pub fn authenticating() -> Self {
        Self { user: None, token: None, loading: true }
    }

    /// Settled state with a live session.
    pub fn authenticated(token: String, user: User) -> Self {
        Self { user: Some(user), token: Some(token), loading: false }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.token.is_some() && self.user.is_some() {
            SessionPhase::Authenticated
        } else if self.loading {
            SessionPhase::Authenticating
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Role of the authenticated user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Landing route for a role after login.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Labeler => "/labeler/groups",
    }
}

// =============================================================
// Persistence
// =============================================================

/// Read the persisted session, if one exists and decodes.
///
/// Any inconsistency (one key missing, user JSON malformed) clears both
/// keys and yields `None` rather than a partial session.
pub fn restore_session(storage: &dyn KeyValueStorage) -> Option<(String, User)> {
    let token = storage.get(TOKEN_KEY);
    let raw_user = storage.get(USER_KEY);
    match (token, raw_user) {
        (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some((token, user)),
            Err(_) => {
                clear_session(storage);
                None
            }
        },
        (None, None) => None,
        _ => {
            clear_session(storage);
            None
        }
    }
}

/// Persist a session under both keys.
pub fn persist_session(storage: &dyn KeyValueStorage, token: &str, user: &User) {
    let Ok(raw_user) = serde_json::to_string(user) else {
        return;
    };
    storage.set(TOKEN_KEY, token);
    storage.set(USER_KEY, &raw_user);
}

/// Remove both session keys.
pub fn clear_session(storage: &dyn KeyValueStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// Settle the store from persisted state. Runs once at startup.
pub fn restore_into(auth: RwSignal<AuthState>, storage: &dyn KeyValueStorage) {
    match restore_session(storage) {
        Some((token, user)) => auth.set(AuthState::authenticated(token, user)),
        None => auth.set(AuthState::anonymous()),
    }
}

// =============================================================
// Login / logout
// =============================================================

/// Why a login attempt failed, driving the displayed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginFailure {
    /// Wrong username, password, or role (HTTP 403).
    Credentials,
    /// The server fell over (HTTP 500).
    Server,
    /// Anything else: unreachable server, decode failure, odd status.
    Network,
}

impl LoginFailure {
    /// The message shown on the login form.
    pub fn message(self) -> &'static str {
        match self {
            LoginFailure::Credentials => {
                "Invalid username, password, or role. Please check your credentials and try again."
            }
            LoginFailure::Server => {
                "Server error occurred. Please try again later or contact support."
            }
            LoginFailure::Network => "Network error. Please check your connection and try again.",
        }
    }
}

/// Map a transport error from the login call onto a failure kind.
pub fn classify_login_error(error: &ApiError) -> LoginFailure {
    match error.status() {
        Some(403) => LoginFailure::Credentials,
        Some(500) => LoginFailure::Server,
        _ => LoginFailure::Network,
    }
}

/// Build the session contents from a login response. The server only
/// returns `{user_id, token}`; username and role come from the form.
pub fn session_from_login(data: LoginData, username: String, role: Role) -> (String, User) {
    (data.token, User { id: data.user_id, username, role })
}

/// Run a login attempt end to end: call the server, and on success persist
/// the session and settle the store as authenticated. On any failure the
/// store settles back to anonymous.
///
/// # Errors
///
/// Returns the failure kind the login form translates into a message.
pub async fn login(
    api: &ApiClient,
    storage: &dyn KeyValueStorage,
    auth: RwSignal<AuthState>,
    username: String,
    password: String,
    role: Role,
) -> Result<Role, LoginFailure> {
    auth.set(AuthState::authenticating());
    let request =
        LoginRequest { username: username.clone(), password, role };
    match api.login(&request).await {
        Ok(success) => match success.data.into_data() {
            Ok(data) => {
                let (token, user) = session_from_login(data, username, role);
                persist_session(storage, &token, &user);
                auth.set(AuthState::authenticated(token, user));
                Ok(role)
            }
            Err(_) => {
                auth.set(AuthState::anonymous());
                Err(LoginFailure::Network)
            }
        },
        Err(error) => {
            auth.set(AuthState::anonymous());
            Err(classify_login_error(&error))
        }
    }
}

/// Drop the session from memory and storage. No server call is made.
pub fn logout(auth: RwSignal<AuthState>, storage: &dyn KeyValueStorage) {
    clear_session(storage);
    auth.set(AuthState::anonymous());
}
