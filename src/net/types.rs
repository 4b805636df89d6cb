//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! Request payloads are assembled from these types field by field; success
//! responses are decoded with serde so the expected shapes stay
//! schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form payload. Transient: lives only for one submit-and-await cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload, including the selected platform role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Account role selected at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    /// Wire string used in request payloads and `<select>` values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `Student`.
    #[must_use]
    pub fn from_select(value: &str) -> Self {
        match value {
            "teacher" => Role::Teacher,
            _ => Role::Student,
        }
    }
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthSuccess {
    /// The issued session token. Opaque: stored and forwarded, never parsed.
    pub token: String,
    /// Account identity, when the server includes it alongside the token.
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Minimal account identity returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique account identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name, if the account has one.
    #[serde(default)]
    pub name: Option<String>,
}
