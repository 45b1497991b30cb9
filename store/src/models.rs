use serde::{Deserialize, Serialize};

/// Account role. Lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated user's profile data held client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
}

/// An identity paired with its auth token: a logged-in client.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}
