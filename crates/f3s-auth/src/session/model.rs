//! Login payloads and the stored user profile.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Minimum accepted password length at the login form.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Snapshot of the user captured at login.
///
/// Never re-fetched; it is replaced only by the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user ID.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Role names granted by the backend.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Account status, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UserProfile {
    /// "First Last", falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Credentials submitted to `auth/login`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    /// Login name.
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    /// Plain password; never logged.
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginCredentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Username is required")));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Password is required")));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Password must be at least 3 characters")));
    }
    Ok(())
}

/// Body returned by `auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Long-lived token exchanged at `auth/refresh`.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    /// Usually "Bearer".
    #[serde(default)]
    pub token_type: String,
    /// The authenticated user.
    pub user: UserProfile,
}

/// Body returned by `auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// New access token.
    pub access_token: String,
    /// Rotated refresh token.
    pub refresh_token: String,
}
