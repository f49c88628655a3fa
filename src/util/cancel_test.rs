use super::*;

#[test]
fn starts_uncancelled() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_sticky_and_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn clones_share_the_flag() {
    let token = CancelToken::new();
    let handle = token.clone();
    handle.cancel();
    assert!(token.is_cancelled());
}
