//! Classification of non-2xx backend responses.

use reqwest::StatusCode;
use serde_json::Value;

use f3s_core::{AppError, ErrorKind};

/// Default message for 403 responses without a body message.
pub const FORBIDDEN_MESSAGE: &str =
    "Access denied. You do not have permission to perform this action.";
/// Default message for 404 responses without a body message.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
/// Default message for 5xx responses without a body message.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Maps a status code to its error category.
pub fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status.as_u16() {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        s if s >= 500 => ErrorKind::ServerError,
        _ => ErrorKind::Unknown,
    }
}

/// Builds the error for a non-2xx response.
///
/// The message is the body's `error` string, else its `message` string,
/// else a default for the category. This holds for 403, 404, and 5xx too:
/// the backend's own text wins over the generic defaults above.
pub fn classify(status: StatusCode, body: &[u8]) -> AppError {
    let kind = kind_for_status(status);
    let message = body_message(body).unwrap_or_else(|| default_message(kind, status));
    AppError::new(kind, message).with_status(status.as_u16())
}

fn body_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["error", "message"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}

fn default_message(kind: ErrorKind, status: StatusCode) -> String {
    match kind {
        ErrorKind::Forbidden => FORBIDDEN_MESSAGE.to_string(),
        ErrorKind::NotFound => NOT_FOUND_MESSAGE.to_string(),
        ErrorKind::ServerError => SERVER_ERROR_MESSAGE.to_string(),
        _ => format!(
            "API request failed: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )
        .trim_end()
        .to_string(),
    }
}
