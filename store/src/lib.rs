pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalBackend;

pub use models::{Identity, Role, Session};
pub use session::{SessionBackend, SessionStore, TOKEN_KEY, USER_KEY};
