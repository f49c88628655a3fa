//! Wire DTOs for the auth service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the auth backend's JSON payloads exactly so serde can
//! enforce the contract; a success body missing any field is a
//! deserialization error the caller maps to a transport-level failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Verified identity for the current user.
///
/// Produced only by a successful identity check and valid only for the
/// navigation that fetched it; never persisted client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Login name, unique per user.
    pub username: String,
    /// Given name as stored by the user service.
    pub firstname: String,
    /// Family name as stored by the user service.
    pub lastname: String,
    /// Grants access to the user-administration console.
    #[serde(rename = "admin")]
    pub administrator: bool,
}

impl Session {
    /// Display name shown in page chrome and the admin console.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Login form input, consumed exactly once by the login exchange and never
/// retained afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Identity projection consumed by the admin console chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub full_name: String,
}

/// Error payload returned by the auth service on non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
