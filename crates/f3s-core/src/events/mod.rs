//! Lifecycle events emitted by F3S components.
//!
//! Events are published on a `tokio::sync::broadcast` channel owned by the
//! emitting component and consumed by route guards, the CLI, and logs.

pub mod session;

pub use session::{LogoutReason, SessionEvent};
