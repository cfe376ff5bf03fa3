//! Unverified JWT payload decoding.
//!
//! The client never holds the signing key, so tokens are only parsed to
//! read `exp`. The backend remains the authority on validity.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::Utc;

use f3s_core::{AppError, AppResult};

use super::claims::Claims;

/// Seconds subtracted from `exp` so a token is treated as expired shortly
/// before the backend would reject it.
pub const EXPIRY_MARGIN_SECONDS: i64 = 30;

/// URL-safe engine that accepts both padded and unpadded input.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes the payload segment of `token` into [`Claims`].
pub fn decode(token: &str) -> AppResult<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => return Err(AppError::invalid_token("Token has fewer than two segments")),
    };

    // Standard-alphabet characters are folded into the URL-safe alphabet.
    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE
        .decode(normalized.as_bytes())
        .map_err(|e| AppError::invalid_token(format!("Token payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::invalid_token(format!("Token payload is not valid JSON: {e}")))
}

/// Decodes `token`, returning `None` on any failure.
pub fn decode_opt(token: &str) -> Option<Claims> {
    decode(token).ok()
}

/// Whether `token` is expired (or undecodable) at the current time.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now().timestamp())
}

/// Whether `token` is expired (or undecodable) at `now` (Unix seconds).
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match decode_opt(token) {
        Some(claims) => claims.exp - EXPIRY_MARGIN_SECONDS <= now,
        None => true,
    }
}

/// Seconds until `token` expires, floored at zero.
pub fn time_until_expiry(token: &str) -> u64 {
    time_until_expiry_at(token, Utc::now().timestamp())
}

/// Seconds between `now` and the token's `exp`, floored at zero.
pub fn time_until_expiry_at(token: &str, now: i64) -> u64 {
    decode_opt(token)
        .map(|claims| (claims.exp - now).max(0) as u64)
        .unwrap_or(0)
}

/// The raw `exp` claim, if the token decodes.
pub fn expiration_time(token: &str) -> Option<i64> {
    decode_opt(token).map(|claims| claims.exp)
}
