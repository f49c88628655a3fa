use super::*;

fn auth_failure(status: u16) -> AuthFailure {
    AuthFailure::Auth { status, detail: "denied".to_owned() }
}

#[test]
fn status_carried_only_by_auth_variant() {
    assert_eq!(auth_failure(401).status(), Some(401));
    assert_eq!(AuthFailure::Validation("empty".to_owned()).status(), None);
    assert_eq!(AuthFailure::Network("offline".to_owned()).status(), None);
    assert_eq!(AuthFailure::Permission("no".to_owned()).status(), None);
}

#[test]
fn detail_is_display_text_for_every_variant() {
    assert_eq!(auth_failure(403).detail(), "denied");
    assert_eq!(AuthFailure::Validation("empty".to_owned()).detail(), "empty");
    assert_eq!(AuthFailure::malformed().detail(), "malformed error response");
}

#[test]
fn classify_redirects_on_401_and_403_without_logout() {
    for status in [401, 403] {
        assert_eq!(
            classify(&auth_failure(status), "/admin/login"),
            FailureAction::Reauthenticate { redirect_to: "/admin/login", logout: false }
        );
    }
}

#[test]
fn classify_surfaces_other_statuses() {
    for status in [400, 404, 500, 503] {
        assert_eq!(classify(&auth_failure(status), "/admin/login"), FailureAction::Surface);
    }
}

#[test]
fn classify_surfaces_statusless_failures() {
    assert_eq!(classify(&AuthFailure::Network("offline".to_owned()), "/admin/login"), FailureAction::Surface);
}

#[test]
fn display_renders_detail() {
    assert_eq!(auth_failure(401).to_string(), "denied");
}
