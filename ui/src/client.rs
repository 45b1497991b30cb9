//! Platform-appropriate session store and API client constructors.
//!
//! - **Web** (wasm32 + `web` feature): session entries live in browser
//!   `localStorage` via [`store::LocalBackend`].
//! - **Native** (tests, tooling): a process-wide [`store::MemoryBackend`],
//!   so the session survives across calls within the process.

use api::ApiClient;
use store::{SessionBackend, SessionStore};

/// The platform session store.
pub fn session() -> SessionStore<impl SessionBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;

        use store::MemoryBackend;

        static BACKEND: OnceLock<MemoryBackend> = OnceLock::new();
        SessionStore::new(BACKEND.get_or_init(MemoryBackend::new).clone())
    }
}

/// An API client carrying the stored session token, if any.
pub fn make_client() -> ApiClient {
    ApiClient::new(session().token())
}
