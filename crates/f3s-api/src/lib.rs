//! # f3s-api
//!
//! HTTP API layer for the F3S site built on Axum.
//!
//! Serves the stateless generator endpoints, the game catalog search, and
//! the virtual-assistant proxy, with CORS, compression, request logging,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
