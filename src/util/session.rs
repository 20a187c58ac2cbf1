//! Persisted session record backed by browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is the single source of truth for the client-side
//! auth gate: a record in storage means authenticated, nothing else does.
//! It is written once on login success and removed on logout. Token expiry
//! is the server's concern and surfaces here only as a failed request.
//!
//! Client-side (hydrate): real localStorage reads/writes.
//! Server-side (SSR): always unauthenticated; writes are no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// localStorage key holding the opaque bearer token.
#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// localStorage key holding the JSON-encoded user.
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// The persisted session: opaque bearer token plus the logged-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user: User,
}

/// Build a session record from raw storage values. Both parts must be
/// present and the user JSON must parse; anything else reads as
/// unauthenticated.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session(token: Option<String>, user_json: Option<String>) -> Option<SessionRecord> {
    let token = token?;
    let user = serde_json::from_str(&user_json?).ok()?;
    Some(SessionRecord { token, user })
}

/// Load the session record, or `None` when unauthenticated or on the server.
pub fn load_session() -> Option<SessionRecord> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        parse_session(token, user_json)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session`: token and user written as a unit.
pub fn save_session(session: &SessionRecord) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let Ok(user_json) = serde_json::to_string(&session.user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USER_KEY, &user_json);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the session record. Client-side invalidation only: the token is
/// discarded, never revoked against the server.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// True iff a complete session record is present in storage.
pub fn is_authenticated() -> bool {
    load_session().is_some()
}
