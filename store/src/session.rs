//! # Session persistence
//!
//! A [`SessionStore`] keeps the authenticated identity and its token as two
//! independent durable entries ([`USER_KEY`] holds the identity as JSON,
//! [`TOKEN_KEY`] the raw token string) behind a pluggable [`SessionBackend`].
//!
//! The store is the sole source of truth for "is a user logged in": a session
//! exists only when *both* entries are present and the identity parses. A
//! partial pair (token without identity, or vice versa) or malformed JSON is
//! treated as logged out and never panics.
//!
//! The backing storage offers no multi-key transaction, so the both-or-neither
//! invariant is held by routing every mutation through [`SessionStore::save`]
//! and [`SessionStore::clear`].

use crate::models::{Identity, Session};

/// Durable key for the serialized identity record.
pub const USER_KEY: &str = "pawhome:user";
/// Durable key for the raw token string.
pub const TOKEN_KEY: &str = "pawhome:token";

/// Key/value storage underneath the session store.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Typed session persistence over a [`SessionBackend`].
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the persisted session, if any.
    ///
    /// Returns `Some` only when both entries are present and the identity
    /// record parses. Missing or malformed data restores as logged out.
    /// Idempotent; safe to call at any time.
    pub fn restore(&self) -> Option<Session> {
        let raw = self.backend.read(USER_KEY)?;
        let token = self.backend.read(TOKEN_KEY)?;
        let identity: Identity = serde_json::from_str(&raw).ok()?;
        Some(Session { identity, token })
    }

    /// The stored token, if a complete session is present.
    pub fn token(&self) -> Option<String> {
        self.restore().map(|session| session.token)
    }

    /// Persist both entries as a pair.
    pub fn save(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(&session.identity) {
            self.backend.write(USER_KEY, &raw);
            self.backend.write(TOKEN_KEY, &session.token);
        }
    }

    /// Delete both entries unconditionally. Purely local, never fails.
    pub fn clear(&self) {
        self.backend.delete(USER_KEY);
        self.backend.delete(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::models::Role;

    fn identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::User,
            phone: "555-0101".to_string(),
        }
    }

    fn store() -> SessionStore<MemoryBackend> {
        SessionStore::new(MemoryBackend::new())
    }

    #[test]
    fn restore_on_empty_storage_is_logged_out() {
        assert_eq!(store().restore(), None);
    }

    #[test]
    fn save_then_restore_round_trips() {
        let store = store();
        let session = Session {
            identity: identity(),
            token: "tok-123".to_string(),
        };

        store.save(&session);

        let restored = store.restore().unwrap();
        assert_eq!(restored.identity, session.identity);
        assert_eq!(restored.token, "tok-123");
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn token_without_identity_restores_as_logged_out() {
        let backend = MemoryBackend::new();
        backend.write(TOKEN_KEY, "orphan-token");

        let store = SessionStore::new(backend);
        assert_eq!(store.restore(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn identity_without_token_restores_as_logged_out() {
        let backend = MemoryBackend::new();
        backend.write(USER_KEY, &serde_json::to_string(&identity()).unwrap());

        assert_eq!(SessionStore::new(backend).restore(), None);
    }

    #[test]
    fn malformed_identity_restores_as_logged_out() {
        let backend = MemoryBackend::new();
        backend.write(USER_KEY, "{not json");
        backend.write(TOKEN_KEY, "tok");

        assert_eq!(SessionStore::new(backend).restore(), None);
    }

    #[test]
    fn clear_removes_both_entries() {
        let store = store();
        store.save(&Session {
            identity: identity(),
            token: "tok".to_string(),
        });

        store.clear();

        assert_eq!(store.restore(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn clear_on_empty_storage_is_a_no_op() {
        let store = store();
        store.clear();
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn save_replaces_a_previous_session() {
        let store = store();
        store.save(&Session {
            identity: identity(),
            token: "old".to_string(),
        });

        let mut other = identity();
        other.id = "u2".to_string();
        store.save(&Session {
            identity: other.clone(),
            token: "new".to_string(),
        });

        let restored = store.restore().unwrap();
        assert_eq!(restored.identity.id, "u2");
        assert_eq!(restored.token, "new");
    }
}
