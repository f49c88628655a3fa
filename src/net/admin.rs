//! Auth capabilities for the user-administration console.
//!
//! DESIGN
//! ======
//! The console framework drives authentication through six operations;
//! this module pins them down as a typed interface and implements it over
//! the identity, login, and logout exchanges plus the administrator-flag
//! predicate. Plain authentication is not enough here: a verified session
//! without the flag is rejected with its own failure kind.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::future::Future;

use crate::net::api;
use crate::net::failure::{AuthFailure, FailureAction, classify};
use crate::net::types::{Credentials, Identity, Session};
use crate::util::redirect::ADMIN_LOGIN_ROUTE;

/// The six capabilities the console framework consumes.
#[allow(async_fn_in_trait)]
pub trait ConsoleAuthProvider {
    /// Exchange credentials; a failure's detail is display text.
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthFailure>;
    /// Best-effort logout; always resolves to the console login route.
    async fn logout(&self) -> &'static str;
    /// Verified session with the administrator flag set, or a failure the
    /// console turns into a login redirect.
    async fn check_auth(&self) -> Result<(), AuthFailure>;
    /// Decide whether a data-layer failure forces re-authentication.
    fn check_error(&self, failure: &AuthFailure) -> FailureAction;
    /// Identity projection for the console chrome.
    async fn get_identity(&self) -> Result<Identity, AuthFailure>;
    /// Claims beyond the administrator flag; none are modeled.
    async fn get_permissions(&self) -> Result<Vec<String>, AuthFailure>;
}

/// Gate requiring a verified session whose administrator flag is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminGate;

/// Reject sessions that lack the administrator flag.
pub(crate) fn require_administrator(session: &Session) -> Result<(), AuthFailure> {
    if session.administrator {
        Ok(())
    } else {
        Err(AuthFailure::Permission("Insufficient privileges".to_owned()))
    }
}

/// Project a session into the console identity shape.
pub(crate) fn project_identity(session: &Session) -> Identity {
    Identity { id: session.username.clone(), full_name: session.full_name() }
}

/// `check_auth` over an injected verifier, so the admin predicate is
/// testable without a browser.
pub(crate) async fn check_auth_with<F, Fut>(verify: F) -> Result<Session, AuthFailure>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Session, AuthFailure>>,
{
    let session = verify().await?;
    require_administrator(&session)?;
    Ok(session)
}

impl ConsoleAuthProvider for AdminGate {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthFailure> {
        api::submit_login(credentials).await
    }

    async fn logout(&self) -> &'static str {
        api::submit_logout().await;
        ADMIN_LOGIN_ROUTE
    }

    async fn check_auth(&self) -> Result<(), AuthFailure> {
        check_auth_with(api::fetch_identity).await.map(|_| ())
    }

    fn check_error(&self, failure: &AuthFailure) -> FailureAction {
        classify(failure, ADMIN_LOGIN_ROUTE)
    }

    async fn get_identity(&self) -> Result<Identity, AuthFailure> {
        let session = api::fetch_identity().await?;
        Ok(project_identity(&session))
    }

    async fn get_permissions(&self) -> Result<Vec<String>, AuthFailure> {
        Ok(Vec::new())
    }
}
