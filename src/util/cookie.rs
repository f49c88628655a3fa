//! Session-cookie probe.
//!
//! Presence of the access cookie only decides whether a navigation skips
//! the login detour's network round trip; its value is opaque and the
//! server is the sole authority on validity. A hit here never authorizes
//! anything; the identity check still runs.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Fixed name of the access cookie set by the auth service.
pub const ACCESS_COOKIE: &str = "crowsnest-auth-access";

/// Locate a cookie by exact name in a raw `document.cookie` string.
///
/// Returns the stored value; an empty value counts as absent, matching how
/// a cleared cookie looks before the browser drops it.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then_some(value.trim())
        })
        .filter(|value| !value.is_empty())
}

/// Read the access cookie from the live document, if any.
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        find_cookie(&cookies, ACCESS_COOKIE).map(ToOwned::to_owned)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
