//! JWT payload decoding and expiry helpers.

pub mod claims;
pub mod codec;

pub use claims::Claims;
pub use codec::{
    EXPIRY_MARGIN_SECONDS, decode, decode_opt, expiration_time, is_expired, is_expired_at,
    time_until_expiry, time_until_expiry_at,
};
