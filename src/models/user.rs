//! User and viewer models

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// The original backend spelled the restaurateur role `RISTORATORE`; the
/// alias keeps responses from older deployments deserializable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "RESTAURATEUR", alias = "RISTORATORE")]
    Restaurateur,
    #[serde(rename = "USER")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Restaurateur => "RESTAURATEUR",
            Role::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public identity of a user as embedded in events and participations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// The authenticated identity evaluating or acting on events.
///
/// Established at session start, cleared on logout; `username` (an email)
/// is the identity key used to relate the viewer to organizers and owners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewer {
    pub username: String,
    pub name: String,
    pub role: Role,
}

/// Wire shape of the session endpoints (`/login`, `/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub username: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub message: String,
}

impl From<SessionData> for Viewer {
    fn from(data: SessionData) -> Self {
        Viewer {
            username: data.username,
            name: data.name,
            role: data.role,
        }
    }
}

/// User row in the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
}

/// Payload for the admin create-user endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
