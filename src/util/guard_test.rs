use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::admin;

fn session(administrator: bool) -> Session {
    Session {
        username: "alice".to_owned(),
        firstname: "Alice".to_owned(),
        lastname: "Ahab".to_owned(),
        administrator,
    }
}

#[test]
fn missing_token_redirects_without_verifying() {
    let verified = Rc::new(Cell::new(false));
    let flag = verified.clone();
    let cancel = CancelToken::new();

    let decision = block_on(evaluate(
        "/reports/weekly",
        None,
        move || {
            flag.set(true);
            async { Ok(session(false)) }
        },
        &cancel,
    ));

    let GuardDecision::Redirect { intent, failure } = decision else {
        panic!("expected a redirect");
    };
    assert!(!verified.get(), "identity check must not run without a token");
    assert_eq!(intent.login_url(), "/login?from=%2Freports%2Fweekly");
    assert_eq!(failure.status(), Some(401));
}

#[test]
fn verified_session_renders() {
    let cancel = CancelToken::new();
    let decision = block_on(evaluate("/ecdis", Some("tok".to_owned()), || async { Ok(session(false)) }, &cancel));
    assert_eq!(decision, GuardDecision::Render(session(false)));
}

#[test]
fn rejected_session_redirects_with_the_server_detail() {
    let cancel = CancelToken::new();
    let failure = AuthFailure::Auth { status: 401, detail: "Expired session".to_owned() };
    let verify_failure = failure.clone();
    let decision = block_on(evaluate("/ecdis", Some("tok".to_owned()), move || async move { Err(verify_failure) }, &cancel));

    assert_eq!(
        decision,
        GuardDecision::Redirect {
            intent: RedirectIntent::with_message("/ecdis", "Expired session"),
            failure,
        }
    );
}

#[test]
fn network_failure_also_redirects() {
    let cancel = CancelToken::new();
    let decision = block_on(evaluate(
        "/",
        Some("tok".to_owned()),
        || async { Err(AuthFailure::Network("connection refused".to_owned())) },
        &cancel,
    ));
    assert!(matches!(decision, GuardDecision::Redirect { .. }));
}

#[test]
fn cancelled_evaluation_commits_nothing() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let granted = block_on(evaluate("/", Some("tok".to_owned()), || async { Ok(session(true)) }, &cancel));
    assert_eq!(granted, GuardDecision::Superseded);

    let denied = block_on(evaluate("/", None, || async { Ok(session(true)) }, &cancel));
    assert_eq!(denied, GuardDecision::Superseded);
}

#[test]
fn ordinary_guard_accepts_a_session_the_admin_gate_rejects() {
    let cancel = CancelToken::new();
    let plain = session(false);

    let decision = block_on(evaluate("/", Some("tok".to_owned()), || async { Ok(session(false)) }, &cancel));
    assert_eq!(decision, GuardDecision::Render(plain.clone()));

    let gate_outcome = block_on(admin::check_auth_with(|| async { Ok(plain) }));
    assert!(matches!(gate_outcome, Err(AuthFailure::Permission(_))));
}
