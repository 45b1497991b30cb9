//! Pet catalog endpoints.
//!
//! Every response carrying an `image` value is rewritten with
//! [`crate::upload::file_url`] so callers always see an absolute URL.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreatePet, Pet, UpdatePet};
use crate::upload::file_url;

fn absolutize(client: &ApiClient, mut pet: Pet) -> Pet {
    pet.image = file_url(client.base_url(), &pet.image);
    pet
}

/// GET `/pets` — the full catalog.
pub async fn list(client: &ApiClient) -> Result<Vec<Pet>, ApiError> {
    let pets: Vec<Pet> = client.get("/pets").await?;
    Ok(pets
        .into_iter()
        .map(|pet| absolutize(client, pet))
        .collect())
}

/// GET `/pets/:id`.
///
/// A public read: sent without the authorization header even when a
/// session exists, unlike the write operations below.
pub async fn get(client: &ApiClient, id: &str) -> Result<Pet, ApiError> {
    let pet: Pet = client.without_token().get(&format!("/pets/{id}")).await?;
    Ok(absolutize(client, pet))
}

/// POST `/pets`.
pub async fn create(client: &ApiClient, data: &CreatePet) -> Result<Pet, ApiError> {
    let pet: Pet = client.post("/pets", data).await?;
    Ok(absolutize(client, pet))
}

/// PUT `/pets/:id`.
pub async fn update(client: &ApiClient, id: &str, data: &UpdatePet) -> Result<Pet, ApiError> {
    let pet: Pet = client.put(&format!("/pets/{id}"), data).await?;
    Ok(absolutize(client, pet))
}

/// DELETE `/pets/:id`.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/pets/{id}")).await
}
