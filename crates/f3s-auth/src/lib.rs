//! # f3s-auth
//!
//! Client-side authentication lifecycle for the F3S admin console.
//!
//! ## Modules
//!
//! - `jwt`: unverified JWT payload decoding and expiry bookkeeping
//! - `session`: session slots, persistent stores, and the session manager
//! - `backend`: the login/refresh seam implemented by the HTTP client
//! - `guard`: route guard gating protected views on a valid session

pub mod backend;
pub mod guard;
pub mod jwt;
pub mod session;

pub use backend::AuthBackend;
pub use guard::{GuardState, GuardView, RouteGuard};
pub use jwt::Claims;
pub use session::{
    FileSessionStore, LoginCredentials, LoginResponse, MemorySessionStore, SessionManager,
    SessionSlot, SessionState, SessionStore, SessionStoreExt, TokenPair, UserProfile,
};

#[cfg(test)]
pub(crate) mod test_support;
