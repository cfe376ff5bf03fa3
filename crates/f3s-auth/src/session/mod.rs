//! Session slots, persistent stores, and the session lifecycle manager.

pub mod file_store;
pub mod manager;
pub mod model;
pub mod store;

pub use file_store::FileSessionStore;
pub use manager::{SessionManager, SessionState};
pub use model::{LoginCredentials, LoginResponse, TokenPair, UserProfile};
pub use store::{MemorySessionStore, SessionSlot, SessionStore, SessionStoreExt};
