//! Per-navigation route guard.
//!
//! Cheap check first: a missing access cookie redirects to login without a
//! network round trip. A present cookie is advisory only; the identity
//! check is the sole authority for rendering protected content. Each
//! navigation evaluates its own probe/verify pair; evaluations are never
//! shared or coalesced.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::Future;

use crate::net::failure::AuthFailure;
use crate::net::types::Session;
use crate::util::cancel::CancelToken;
use crate::util::redirect::RedirectIntent;

/// Terminal decision for one guarded navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verified; the subtree renders with this session in context.
    Render(Session),
    /// Denied; the login detour supersedes the navigation.
    Redirect { intent: RedirectIntent, failure: AuthFailure },
    /// A newer navigation superseded this evaluation; commit nothing.
    Superseded,
}

/// Evaluate one guarded navigation.
///
/// `token` is the probe result for the access cookie; `verify` runs the
/// identity check and is only awaited when a token is present. The cancel
/// token is consulted before the decision is committed, so a stale
/// evaluation can neither authorize nor redirect a newer route.
pub async fn evaluate<F, Fut>(path: &str, token: Option<String>, verify: F, cancel: &CancelToken) -> GuardDecision
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Session, AuthFailure>>,
{
    if token.is_none() {
        if cancel.is_cancelled() {
            return GuardDecision::Superseded;
        }
        // Same condition the server reports for a tokenless request.
        return GuardDecision::Redirect {
            intent: RedirectIntent::new(path),
            failure: AuthFailure::Auth { status: 401, detail: "Login necessary".to_owned() },
        };
    }

    let outcome = verify().await;
    if cancel.is_cancelled() {
        return GuardDecision::Superseded;
    }
    match outcome {
        Ok(session) => GuardDecision::Render(session),
        Err(failure) => GuardDecision::Redirect {
            intent: RedirectIntent::with_message(path, failure.detail().to_owned()),
            failure,
        },
    }
}

/// Install the guard on a routed page.
///
/// Runs one evaluation on mount, drives the shared session state, and
/// navigates to the login detour on denial. Tearing the subtree down
/// cancels the evaluation; a late result is discarded.
#[cfg(feature = "hydrate")]
pub fn install(session: leptos::prelude::RwSignal<crate::state::session::SessionState>) {
    use leptos::prelude::{Update, on_cleanup};
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    use crate::net::api;
    use crate::state::session::SessionEvent;
    use crate::util::cookie;

    let navigate = use_navigate();
    let cancel = CancelToken::new();
    let cancel_cleanup = cancel.clone();
    on_cleanup(move || cancel_cleanup.cancel());

    session.update(|s| s.apply(SessionEvent::CheckStarted));
    leptos::task::spawn_local(async move {
        let path = current_path().unwrap_or_else(|| "/".to_owned());
        match evaluate(&path, cookie::access_token(), api::fetch_identity, &cancel).await {
            GuardDecision::Render(verified) => {
                session.update(|s| s.apply(SessionEvent::CheckSucceeded(verified)));
            }
            GuardDecision::Redirect { intent, failure } => {
                session.update(|s| s.apply(SessionEvent::CheckFailed(failure)));
                navigate(&intent.login_url(), NavigateOptions::default());
            }
            GuardDecision::Superseded => {
                log::debug!("guard evaluation superseded for {path}");
            }
        }
    });
}

/// Originally requested path, as the router saw it.
#[cfg(feature = "hydrate")]
fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}
