//! Wire models for the pet and user resources.
//!
//! The catalog enums are lowercase strings on the wire; each also exposes
//! `as_str`/`parse` for the filter widgets, where any unknown value (the
//! `"all"` sentinel included) parses to `None`.

use serde::{Deserialize, Serialize};
use store::{Identity, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

impl PetSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PetSize::Small => "small",
            PetSize::Medium => "medium",
            PetSize::Large => "large",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(PetSize::Small),
            "medium" => Some(PetSize::Medium),
            "large" => Some(PetSize::Large),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    Available,
    Adopted,
}

impl PetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Adopted => "adopted",
        }
    }
}

/// An adoptable pet.
///
/// The wire key for the species is `type`; older server deployments omit
/// `status`, so it defaults to `available`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub color: String,
    pub size: PetSize,
    pub description: String,
    /// Upload path or absolute URL; the pet service rewrites this to an
    /// absolute URL on every response.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: PetStatus,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Identity>,
}

/// Payload for POST `/pets`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatePet {
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub gender: Gender,
    pub color: String,
    pub size: PetSize,
    pub description: String,
    pub image: String,
}

/// Payload for PUT `/pets/:id`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PetSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

/// A managed account, as the admin screens see it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
}

/// Payload for POST `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Payload for PUT `/users/:id`. An absent password leaves it unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Response of the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_parses_the_wire_shape() {
        let json = r#"{
            "id": "p1",
            "name": "Rex",
            "type": "dog",
            "breed": "Labrador",
            "age": 3,
            "gender": "male",
            "color": "black",
            "size": "large",
            "description": "Friendly and playful.",
            "image": "rex.png",
            "userId": "u1"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.size, PetSize::Large);
        // Older deployments omit status; it defaults to available.
        assert_eq!(pet.status, PetStatus::Available);
        assert_eq!(pet.owner_id, "u1");
        assert!(pet.owner.is_none());
    }

    #[test]
    fn update_pet_skips_absent_fields() {
        let update = UpdatePet {
            name: Some("Bela".to_string()),
            ..UpdatePet::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Bela"}"#);
    }

    #[test]
    fn create_pet_serializes_species_under_type() {
        let create = CreatePet {
            name: "Mimi".to_string(),
            species: Species::Cat,
            breed: "Siamese".to_string(),
            age: 2,
            gender: Gender::Female,
            color: "white".to_string(),
            size: PetSize::Small,
            description: "Quiet lap cat.".to_string(),
            image: String::new(),
        };

        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["type"], "cat");
        assert!(value.get("species").is_none());
    }

    #[test]
    fn filter_enums_parse_their_wire_values() {
        assert_eq!(Species::parse("dog"), Some(Species::Dog));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(PetSize::parse("medium"), Some(PetSize::Medium));
        // The sentinel and anything unknown mean "no filter".
        assert_eq!(Species::parse("all"), None);
        assert_eq!(PetSize::parse(""), None);
    }
}
