//! Redirect intent: where a denied navigation wanted to go.
//!
//! The guard records the originally requested path in the login URL's
//! `from` parameter so a later successful login can resume it. The login
//! page also honors the legacy `url` (absolute target set by the
//! reverse-proxy detour) and `message` (advisory banner) parameters.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Login route for the map client.
pub const LOGIN_ROUTE: &str = "/login";
/// Guarded admin console route.
pub const ADMIN_ROUTE: &str = "/admin";
/// Login route for the admin console.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";

/// The path a user was denied, preserved so login can resume it, plus an
/// optional advisory message for the login page banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectIntent {
    pub original_path: String,
    pub message: Option<String>,
}

impl RedirectIntent {
    pub fn new(original_path: impl Into<String>) -> Self {
        Self { original_path: original_path.into(), message: None }
    }

    pub fn with_message(original_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { original_path: original_path.into(), message: Some(message.into()) }
    }

    /// Login URL carrying the percent-encoded origin of the detour.
    pub fn login_url(&self) -> String {
        let mut url = format!("{LOGIN_ROUTE}?from={}", urlencoding::encode(&self.original_path));
        if let Some(message) = &self.message {
            url.push_str("&message=");
            url.push_str(&urlencoding::encode(message));
        }
        url
    }
}

/// Admin login URL, with an optional advisory message.
pub fn admin_login_url(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{ADMIN_LOGIN_ROUTE}?message={}", urlencoding::encode(message)),
        None => ADMIN_LOGIN_ROUTE.to_owned(),
    }
}

/// Query parameters recognized by the login page. Values are stored
/// percent-decoded; empty parameters count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginParams {
    /// Client-side path to resume after a successful login.
    pub from: Option<String>,
    /// Absolute redirect target set by the reverse-proxy detour.
    pub url: Option<String>,
    /// Advisory banner text.
    pub message: Option<String>,
}

/// Where a successful login takes the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Client-side navigation within the app.
    Path(String),
    /// Full-page navigation to an absolute target.
    Absolute(String),
}

/// Parse a raw query string (with or without the leading `?`) into the
/// login parameters, decoding each value exactly once.
pub fn parse_login_query(query: &str) -> LoginParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = LoginParams::default();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Ok(value) = urlencoding::decode(value) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let value = value.into_owned();
        match key {
            "from" => params.from = Some(value),
            "url" => params.url = Some(value),
            "message" => params.message = Some(value),
            _ => {}
        }
    }
    params
}

/// Resume destination precedence: explicit absolute target, then the
/// preserved path, then the application root.
pub fn resume_destination(params: &LoginParams) -> Resume {
    if let Some(url) = &params.url {
        return Resume::Absolute(url.clone());
    }
    Resume::Path(params.from.clone().unwrap_or_else(|| "/".to_owned()))
}
