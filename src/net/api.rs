//! HTTP exchanges with the auth service.
//!
//! Hydrate builds issue real requests via `gloo-net`, always with
//! credentials included so the session cookie travels. The default build
//! compiles the entry points to inert stubs, which keeps the response
//! interpretation logic natively testable.
//!
//! ERROR HANDLING
//! ==============
//! Interpretation is pure over `(status, body)`; the transport layer only
//! contributes `AuthFailure::Network`. Every rejection path below returns a
//! typed failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::failure::AuthFailure;
use crate::net::types::{Credentials, ErrorBody, Session};

/// Identity endpoint; a credentialed GET returns the session document.
pub const IDENTITY_ENDPOINT: &str = "/auth/api/me";
/// Login endpoint; POST of the form-encoded password grant.
pub const LOGIN_ENDPOINT: &str = "/auth/api/login";
/// Logout endpoint; POST whose outcome is advisory.
pub const LOGOUT_ENDPOINT: &str = "/auth/api/logout";

/// Validate login input before any network activity.
///
/// Either field absent, empty, or whitespace-only fails; the exchange must
/// not be attempted in that case.
pub fn validate(credentials: &Credentials) -> Result<(), AuthFailure> {
    if credentials.username.trim().is_empty() || credentials.password.trim().is_empty() {
        return Err(AuthFailure::Validation("Username or password are empty".to_owned()));
    }
    Ok(())
}

/// Form-encode the password-grant body for the login exchange.
pub(crate) fn login_form_body(credentials: &Credentials) -> String {
    format!(
        "username={}&password={}&grant_type=password",
        urlencoding::encode(&credentials.username),
        urlencoding::encode(&credentials.password),
    )
}

fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.detail)
}

/// Interpret an identity response per the service contract: any 2xx must
/// carry a complete session document, any other status a `{detail}` body.
pub(crate) fn interpret_identity_response(status: u16, body: &str) -> Result<Session, AuthFailure> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<Session>(body)
            .map_err(|err| AuthFailure::Network(format!("invalid session document: {err}")));
    }
    match error_detail(body) {
        Some(detail) => Err(AuthFailure::Auth { status, detail }),
        None => Err(AuthFailure::malformed()),
    }
}

/// Interpret a login response; any 2xx succeeds and the body is unused.
pub(crate) fn interpret_login_response(status: u16, body: &str) -> Result<(), AuthFailure> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    match error_detail(body) {
        Some(detail) => Err(AuthFailure::Auth { status, detail }),
        None => Err(AuthFailure::malformed()),
    }
}

/// Run the identity check against the live service.
#[cfg(feature = "hydrate")]
pub async fn fetch_identity() -> Result<Session, AuthFailure> {
    let response = gloo_net::http::Request::get(IDENTITY_ENDPOINT)
        .credentials(web_sys::RequestCredentials::Include)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| AuthFailure::Network(err.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    interpret_identity_response(status, &body)
}

/// Identity check outside the browser; always a transport failure.
#[cfg(not(feature = "hydrate"))]
pub async fn fetch_identity() -> Result<Session, AuthFailure> {
    Err(AuthFailure::Network("identity check requires a browser".to_owned()))
}

/// Exchange credentials for a session cookie.
///
/// Validation runs first and short-circuits without touching the network.
#[cfg(feature = "hydrate")]
pub async fn submit_login(credentials: &Credentials) -> Result<(), AuthFailure> {
    validate(credentials)?;
    let response = gloo_net::http::Request::post(LOGIN_ENDPOINT)
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
        .body(login_form_body(credentials))
        .map_err(|err| AuthFailure::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| AuthFailure::Network(err.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    interpret_login_response(status, &body)
}

/// Login outside the browser; validation still applies, then a transport
/// failure.
#[cfg(not(feature = "hydrate"))]
pub async fn submit_login(credentials: &Credentials) -> Result<(), AuthFailure> {
    validate(credentials)?;
    Err(AuthFailure::Network("login requires a browser".to_owned()))
}

/// Best-effort logout. The outcome never gates the result: whatever the
/// server says, the client treats itself as logged out afterwards.
#[cfg(feature = "hydrate")]
pub async fn submit_logout() {
    let result = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await;
    if let Err(err) = result {
        log::debug!("logout call failed: {err}");
    }
}

/// Logout outside the browser; nothing to do.
#[cfg(not(feature = "hydrate"))]
pub async fn submit_logout() {}
