//! Failure taxonomy for the session/auth subsystem.
//!
//! ERROR HANDLING
//! ==============
//! Every rejection path across the auth boundary produces exactly one
//! `AuthFailure`; no untyped error leaves the net or guard code. Validation
//! and auth details are trusted as inline display text; network details are
//! diagnostic.

#[cfg(test)]
#[path = "failure_test.rs"]
mod failure_test;

use thiserror::Error;

/// Typed outcome of a failed auth operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Malformed local input; no network call was attempted.
    #[error("{0}")]
    Validation(String),
    /// Transport failure, or a malformed payload in either direction.
    #[error("{0}")]
    Network(String),
    /// The server rejected the credentials or the session.
    #[error("{detail}")]
    Auth { status: u16, detail: String },
    /// Authenticated, but lacking the administrator flag.
    #[error("{0}")]
    Permission(String),
}

impl AuthFailure {
    /// Non-2xx response whose body did not carry a readable `detail`.
    pub(crate) fn malformed() -> Self {
        Self::Network("malformed error response".to_owned())
    }

    /// HTTP status carried by the failure, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network(_) | Self::Permission(_) => None,
        }
    }

    /// Human-readable detail for inline messages.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(detail) | Self::Network(detail) | Self::Permission(detail) => detail,
            Self::Auth { detail, .. } => detail,
        }
    }
}

/// What a caller does with a failure it did not produce itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// Send the user back through the login detour. `logout` stays false:
    /// the session cookie is left for the server to judge.
    Reauthenticate { redirect_to: &'static str, logout: bool },
    /// Not an auth problem; the caller displays the error itself.
    Surface,
}

/// Map a failure onto the action the console framework takes: 401 and 403
/// force re-authentication, every other status (or no status) surfaces.
pub fn classify(failure: &AuthFailure, login_route: &'static str) -> FailureAction {
    match failure.status() {
        Some(401 | 403) => FailureAction::Reauthenticate { redirect_to: login_route, logout: false },
        _ => FailureAction::Surface,
    }
}
