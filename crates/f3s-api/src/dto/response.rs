//! Response DTOs.

use serde::{Deserialize, Serialize};

/// `{uuid}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UuidResponse {
    pub uuid: String,
}

/// `{password}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResponse {
    pub password: String,
}

/// `{username}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsernameResponse {
    pub username: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of games in the loaded catalog.
    pub games: usize,
}
