//! # f3s-core
//!
//! Core crate for the F3S Software site. Contains configuration schemas,
//! session lifecycle events, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other F3S crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
