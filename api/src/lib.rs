//! # API crate — typed REST services for the PawHome frontends
//!
//! Everything the UI knows about the backend lives here: a thin HTTP
//! adapter plus one module per REST resource, each exposing a function per
//! operation with a fixed request/response shape.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL + optional bearer token over `reqwest` |
//! | [`config`] | The configured API origin (compile-time environment) |
//! | [`error`] | [`ApiError`]: transport failures and non-2xx responses |
//! | [`models`] | Pet and user records and their create/update payloads |
//! | [`auth`] | Login, registration, profile |
//! | [`pets`] | Pet catalog CRUD; rewrites image paths to absolute URLs |
//! | [`users`] | User administration CRUD |
//! | [`upload`] | Multipart file upload and the upload-path → URL transform |
//!
//! Services never retry, cache, or swallow errors; every failure is returned
//! to the caller unmodified.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pets;
pub mod upload;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AuthResponse, CreatePet, CreateUser, Gender, Pet, PetSize, PetStatus, Species, UpdatePet,
    UpdateUser, User,
};
pub use store::{Identity, Role};
