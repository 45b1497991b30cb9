//! Shared view-model logic and components for the PawHome frontends.

mod auth;
pub use auth::{sign_in, sign_out, sign_up, use_auth, AuthProvider, AuthState};

mod client;
pub use client::{make_client, session};

mod guard;
pub use guard::{check_access, Access};

pub mod catalog;
pub use catalog::{featured, CatalogQuery, FEATURED_COUNT, PAGE_SIZE};

pub mod forms;

mod pet_card;
pub use pet_card::PetCard;
