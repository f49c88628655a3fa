use super::*;

#[test]
fn login_url_percent_encodes_the_path() {
    let intent = RedirectIntent::new("/reports/weekly");
    assert_eq!(intent.login_url(), "/login?from=%2Freports%2Fweekly");
}

#[test]
fn login_url_encodes_spaces_and_query_like_paths() {
    assert_eq!(RedirectIntent::new("/a b").login_url(), "/login?from=%2Fa%20b");
    assert_eq!(RedirectIntent::new("/x?y=1&z=2").login_url(), "/login?from=%2Fx%3Fy%3D1%26z%3D2");
}

#[test]
fn login_url_appends_the_advisory_message() {
    let intent = RedirectIntent::with_message("/ecdis", "Expired session");
    assert_eq!(intent.login_url(), "/login?from=%2Fecdis&message=Expired%20session");
}

#[test]
fn admin_login_url_with_and_without_message() {
    assert_eq!(admin_login_url(None), "/admin/login");
    assert_eq!(admin_login_url(Some("Insufficient privileges")), "/admin/login?message=Insufficient%20privileges");
}

#[test]
fn parse_decodes_each_value_exactly_once() {
    let params = parse_login_query("?from=%2Freports%2Fweekly&message=Expired%20session");
    assert_eq!(params.from.as_deref(), Some("/reports/weekly"));
    assert_eq!(params.message.as_deref(), Some("Expired session"));
    assert_eq!(params.url, None);
}

#[test]
fn parse_accepts_a_query_without_leading_question_mark() {
    let params = parse_login_query("url=https%3A%2F%2Fexample.com%2Fauth");
    assert_eq!(params.url.as_deref(), Some("https://example.com/auth"));
}

#[test]
fn parse_ignores_unknown_and_empty_parameters() {
    let params = parse_login_query("?from=&other=1&message=");
    assert_eq!(params, LoginParams::default());
}

#[test]
fn redirect_round_trips_through_the_parser() {
    let intent = RedirectIntent::with_message("/x?y=1&z=2", "Expired session");
    let url = intent.login_url();
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    let params = parse_login_query(query);
    assert_eq!(params.from.as_deref(), Some("/x?y=1&z=2"));
    assert_eq!(params.message.as_deref(), Some("Expired session"));
}

#[test]
fn resume_prefers_absolute_url_then_from_then_root() {
    let absolute = LoginParams {
        from: Some("/ecdis".to_owned()),
        url: Some("https://example.com/auth".to_owned()),
        message: None,
    };
    assert_eq!(resume_destination(&absolute), Resume::Absolute("https://example.com/auth".to_owned()));

    let from_only = LoginParams { from: Some("/ecdis".to_owned()), url: None, message: None };
    assert_eq!(resume_destination(&from_only), Resume::Path("/ecdis".to_owned()));

    assert_eq!(resume_destination(&LoginParams::default()), Resume::Path("/".to_owned()));
}
