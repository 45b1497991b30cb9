//! Authentication context and session actions.
//!
//! [`AuthProvider`] owns the process-wide session state; everything that
//! needs the current identity reads it through [`use_auth`]. The actions
//! ([`sign_in`], [`sign_up`], [`sign_out`]) are the only paths that mutate
//! the persisted session, which keeps its both-or-neither invariant intact.

use api::ApiError;
use dioxus::prelude::*;
use store::{Identity, Session, SessionBackend, SessionStore};

use crate::client::{make_client, session};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// Still restoring the persisted session on startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session on mount, then refresh the identity
    // from the server when a token is present.
    let _ = use_resource(move || async move {
        let stored = session().restore();
        auth_state.set(AuthState {
            user: stored.as_ref().map(|s| s.identity.clone()),
            loading: false,
        });

        let Some(mut stored) = stored else { return };
        match api::auth::profile(&make_client()).await {
            Ok(identity) => {
                if identity != stored.identity {
                    stored.identity = identity.clone();
                    session().save(&stored);
                    auth_state.set(AuthState {
                        user: Some(identity),
                        loading: false,
                    });
                }
            }
            // The token was rejected outright; drop the stale session.
            Err(ApiError::Status { status: 401, .. }) => {
                session().clear();
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
            // Unreachable server: keep the stored identity.
            Err(err) => tracing::warn!("profile refresh failed: {err}"),
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a successful authentication response as the new session.
/// An `Err` passes through without touching the stored entries.
fn commit_login<B: SessionBackend>(
    store: &SessionStore<B>,
    outcome: Result<api::AuthResponse, ApiError>,
) -> Result<Session, ApiError> {
    let response = outcome?;
    let new_session = Session {
        identity: response.user,
        token: response.token,
    };
    store.save(&new_session);
    Ok(new_session)
}

fn publish(mut auth: Signal<AuthState>, new_session: Session) {
    auth.set(AuthState {
        user: Some(new_session.identity),
        loading: false,
    });
}

/// Log in and persist the session.
///
/// On failure the previously persisted session, if any, is left untouched
/// and the error is returned to the caller; there is no retry.
pub async fn sign_in(
    auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let outcome = api::auth::login(&make_client(), email, password).await;
    let new_session = commit_login(&session(), outcome)
        .inspect_err(|err| tracing::error!("login failed: {err}"))?;
    publish(auth, new_session);
    Ok(())
}

/// Create an account and persist the session; same contract as [`sign_in`].
pub async fn sign_up(
    auth: Signal<AuthState>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let outcome = api::auth::register(&make_client(), name, email, password).await;
    let new_session = commit_login(&session(), outcome)
        .inspect_err(|err| tracing::error!("registration failed: {err}"))?;
    publish(auth, new_session);
    Ok(())
}

/// Log out: clear both persisted entries and publish "unauthenticated".
/// Purely local and unconditional; no network call is involved.
pub fn sign_out(mut auth: Signal<AuthState>) {
    session().clear();
    auth.set(AuthState {
        user: None,
        loading: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AuthResponse;
    use store::{MemoryBackend, Role};

    fn prior_session() -> Session {
        Session {
            identity: Identity {
                id: "u1".to_string(),
                name: "Ana Souza".to_string(),
                email: "ana@example.com".to_string(),
                role: Role::User,
                phone: "555-0101".to_string(),
            },
            token: "old-token".to_string(),
        }
    }

    #[test]
    fn failed_login_leaves_the_stored_session_untouched() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save(&prior_session());

        let outcome = Err(ApiError::Status {
            status: 401,
            message: "invalid credentials".to_string(),
        });
        assert!(commit_login(&store, outcome).is_err());

        assert_eq!(store.restore(), Some(prior_session()));
    }

    #[test]
    fn failed_login_on_empty_storage_stays_logged_out() {
        let store = SessionStore::new(MemoryBackend::new());

        let outcome = Err(ApiError::Status {
            status: 500,
            message: "server error".to_string(),
        });
        assert!(commit_login(&store, outcome).is_err());

        assert_eq!(store.restore(), None);
    }

    #[test]
    fn successful_login_replaces_the_stored_session() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save(&prior_session());

        let mut identity = prior_session().identity;
        identity.id = "u2".to_string();
        let committed = commit_login(
            &store,
            Ok(AuthResponse {
                user: identity.clone(),
                token: "new-token".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(committed.identity, identity);
        let restored = store.restore().unwrap();
        assert_eq!(restored.identity.id, "u2");
        assert_eq!(restored.token, "new-token");
    }
}
