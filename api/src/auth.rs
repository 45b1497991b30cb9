//! Authentication endpoints.

use serde::Serialize;
use store::Identity;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::AuthResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// POST `/auth/login`.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    client
        .post("/auth/login", &LoginRequest { email, password })
        .await
}

/// POST `/auth/register`.
pub async fn register(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    client
        .post(
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
}

/// GET `/auth/profile` — the caller's current identity.
pub async fn profile(client: &ApiClient) -> Result<Identity, ApiError> {
    client.get("/auth/profile").await
}
