//! Flash message utilities for one-shot user notices.
//!
//! Flash messages are short-lived notices stored in a cookie that survive a
//! single redirect: set on the mutating route's 302 response, read and
//! cleared when the index page renders next.

use axum::http::header::{HeaderMap, COOKIE, LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

const COOKIE_NAME: &str = "flash_message";

/// Flash message structure stored in the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessage {
    /// Message type (e.g., "error", "success", "info")
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message content to display
    pub message: String,
}

impl FlashMessage {
    /// Create an error flash message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message_type: "error".to_string(),
            message: message.into(),
        }
    }

    /// Create a success flash message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
        }
    }

    /// Create an info flash message.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message_type: "info".to_string(),
            message: message.into(),
        }
    }

    /// Serialize to JSON for cookie storage.
    pub fn to_cookie_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Build a Set-Cookie header value for the flash message.
    ///
    /// Max-Age 60 is a safety net in case the follow-up render never happens.
    pub fn to_set_cookie_header(&self) -> String {
        let cookie_value = self.to_cookie_value();
        let encoded = urlencoding::encode(&cookie_value);
        format!("{COOKIE_NAME}={encoded}; Path=/; SameSite=Lax; Max-Age=60")
    }
}

/// Set-Cookie header value that clears the flash cookie.
pub fn clear_cookie_header() -> String {
    format!("{COOKIE_NAME}=; Path=/; SameSite=Lax; Max-Age=0")
}

/// Reads a pending flash message from the request's Cookie header.
pub fn take_from_headers(headers: &HeaderMap) -> Option<FlashMessage> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    let value = cookies.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(COOKIE_NAME)
            .and_then(|rest| rest.strip_prefix('='))
    })?;
    let decoded = urlencoding::decode(value).ok()?;
    serde_json::from_str(&decoded).ok()
}

/// Create a 302 redirect response carrying a flash message cookie.
pub fn redirect_with_flash(url: &str, flash: FlashMessage) -> Response {
    (
        StatusCode::FOUND,
        [
            (LOCATION, url.to_string()),
            (SET_COOKIE, flash.to_set_cookie_header()),
        ],
    )
        .into_response()
}

/// Create a plain 302 redirect response.
pub fn redirect(url: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, url.to_string())]).into_response()
}
