use axum::http::{header, HeaderMap, HeaderValue};
use shared::domain::SessionId;

/// Reads the session id out of the `Cookie` headers. Malformed values are
/// treated as absent so the caller mints a new session.
pub(crate) fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.parse().ok())
}

pub(crate) fn session_cookie(
    cookie_name: &str,
    session_id: SessionId,
    max_age_seconds: i64,
) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{cookie_name}={session_id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}"
    ))
    .ok()
}

pub(crate) fn expired_cookie(cookie_name: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{cookie_name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
    ))
    .ok()
}

#[cfg(test)]
#[path = "tests/session_cookie_tests.rs"]
mod tests;
