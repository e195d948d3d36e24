//! One-shot flash messages carried across a redirect in a cookie.
//!
//! The message is form-urlencoded into the `flash` cookie on the redirect
//! response and cleared by the page that displays it.

use axum::http::{
    HeaderMap,
    header::{COOKIE, SET_COOKIE},
};
use axum::response::{IntoResponse, Redirect, Response};
use url::form_urlencoded;

/// Name of the cookie holding the pending message.
pub const FLASH_COOKIE: &str = "flash";

/// Lifetime of an unread flash message, in seconds.
const FLASH_MAX_AGE: u32 = 60;

/// `Set-Cookie` value storing `message`.
pub fn set_cookie(message: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{FLASH_COOKIE}={encoded}; Path=/; Max-Age={FLASH_MAX_AGE}; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value removing any pending message.
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Extracts the pending flash message from the request cookies.
///
/// Handles multiple cookies in the `Cookie` header by splitting on
/// semicolons and ignoring everything except [`FLASH_COOKIE`].
pub fn read(headers: &HeaderMap) -> Option<String> {
    let raw = headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(FLASH_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })?;

    // The encoded message contains no '=' or '&', so it parses as a single key.
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(message, _)| message.into_owned())
        .filter(|message| !message.is_empty())
}

/// Redirects to `to` with `message` queued for display.
pub fn redirect_with(to: &str, message: &str) -> Response {
    ([(SET_COOKIE, set_cookie(message))], Redirect::to(to)).into_response()
}
