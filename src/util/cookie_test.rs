use super::*;

#[test]
fn absent_cookie_yields_nothing() {
    assert_eq!(find_cookie("", ACCESS_COOKIE), None);
    assert_eq!(find_cookie("theme=dark; lang=en", ACCESS_COOKIE), None);
}

#[test]
fn returns_exact_stored_value() {
    assert_eq!(find_cookie("crowsnest-auth-access=tok123", ACCESS_COOKIE), Some("tok123"));
}

#[test]
fn finds_value_among_surrounding_cookies() {
    let cookies = "theme=dark; crowsnest-auth-access=tok123; lang=en";
    assert_eq!(find_cookie(cookies, ACCESS_COOKIE), Some("tok123"));

    let trailing = "crowsnest-auth-access=tok123; lang=en";
    assert_eq!(find_cookie(trailing, ACCESS_COOKIE), Some("tok123"));

    let leading = "lang=en; crowsnest-auth-access=tok123";
    assert_eq!(find_cookie(leading, ACCESS_COOKIE), Some("tok123"));
}

#[test]
fn name_must_match_exactly() {
    assert_eq!(find_cookie("xcrowsnest-auth-access=tok123", ACCESS_COOKIE), None);
    assert_eq!(find_cookie("crowsnest-auth-access-old=tok123", ACCESS_COOKIE), None);
}

#[test]
fn empty_value_counts_as_absent() {
    assert_eq!(find_cookie("crowsnest-auth-access=; lang=en", ACCESS_COOKIE), None);
}

#[test]
fn value_may_contain_equals_signs() {
    assert_eq!(find_cookie("crowsnest-auth-access=a=b=c", ACCESS_COOKIE), Some("a=b=c"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn access_token_is_none_without_a_browser() {
    assert_eq!(access_token(), None);
}
