//! Request DTOs.

use serde::Deserialize;

/// Query of `GET /api/generators/passwordGenerator`.
///
/// `length` is kept as text so a non-numeric value falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordQuery {
    pub length: Option<String>,
}

impl PasswordQuery {
    /// The requested length, if it parses.
    pub fn length(&self) -> Option<usize> {
        self.length.as_deref().and_then(|l| l.trim().parse().ok())
    }
}

/// Query of `GET /api/generators/usernameGenerator`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameQuery {
    pub include_number: Option<String>,
}

impl UsernameQuery {
    /// Only the literal `false` turns the numeric suffix off.
    pub fn include_number(&self) -> bool {
        self.include_number.as_deref() != Some("false")
    }
}

/// Query of `GET /api/games`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesQuery {
    pub search: Option<String>,
}
