//! User administration endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateUser, UpdateUser, User};

/// GET `/users`.
pub async fn list(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/users").await
}

/// GET `/users/:id`.
pub async fn get(client: &ApiClient, id: &str) -> Result<User, ApiError> {
    client.get(&format!("/users/{id}")).await
}

/// POST `/users`.
pub async fn create(client: &ApiClient, data: &CreateUser) -> Result<User, ApiError> {
    client.post("/users", data).await
}

/// PUT `/users/:id`.
pub async fn update(client: &ApiClient, id: &str, data: &UpdateUser) -> Result<User, ApiError> {
    client.put(&format!("/users/{id}"), data).await
}

/// DELETE `/users/:id`.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/users/{id}")).await
}
