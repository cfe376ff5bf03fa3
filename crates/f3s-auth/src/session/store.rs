//! Key/value persistence for the three session slots.

use std::fmt;

use dashmap::DashMap;
use tracing::warn;

use f3s_core::AppResult;

use super::model::{LoginResponse, TokenPair, UserProfile};

/// One of the three persisted session entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSlot {
    /// Short-lived bearer token.
    AccessToken,
    /// Long-lived refresh token.
    RefreshToken,
    /// JSON-serialised [`UserProfile`].
    UserInfo,
}

impl SessionSlot {
    /// Every slot, in write order.
    pub const ALL: [SessionSlot; 3] = [Self::AccessToken, Self::RefreshToken, Self::UserInfo];

    /// The persisted key name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AccessToken => "access_token",
            Self::RefreshToken => "refresh_token",
            Self::UserInfo => "user_info",
        }
    }
}

impl fmt::Display for SessionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Synchronous slot storage.
///
/// Each call is atomic for its slot; there is no transaction across slots.
pub trait SessionStore: Send + Sync {
    /// Reads a slot.
    fn get(&self, slot: SessionSlot) -> Option<String>;

    /// Overwrites a slot.
    fn set(&self, slot: SessionSlot, value: &str) -> AppResult<()>;

    /// Removes a slot. Removing an absent slot is not an error.
    fn remove(&self, slot: SessionSlot) -> AppResult<()>;

    /// Removes every slot.
    fn clear(&self) -> AppResult<()> {
        for slot in SessionSlot::ALL {
            self.remove(slot)?;
        }
        Ok(())
    }
}

/// Typed accessors over any [`SessionStore`].
pub trait SessionStoreExt: SessionStore {
    /// The stored access token.
    fn access_token(&self) -> Option<String> {
        self.get(SessionSlot::AccessToken)
    }

    /// The stored refresh token.
    fn refresh_token(&self) -> Option<String> {
        self.get(SessionSlot::RefreshToken)
    }

    /// Whether an access token is present, regardless of expiry.
    fn has_access_token(&self) -> bool {
        self.get(SessionSlot::AccessToken).is_some()
    }

    /// The stored user profile. A corrupt entry reads as absent.
    fn stored_user(&self) -> Option<UserProfile> {
        let raw = self.get(SessionSlot::UserInfo)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Stored user_info is not valid JSON");
                None
            }
        }
    }

    /// Writes all three slots from a login response.
    fn save_login(&self, response: &LoginResponse) -> AppResult<()> {
        self.set(SessionSlot::AccessToken, &response.access_token)?;
        self.set(SessionSlot::RefreshToken, &response.refresh_token)?;
        self.set(SessionSlot::UserInfo, &serde_json::to_string(&response.user)?)
    }

    /// Replaces the token slots after a refresh; the user is left untouched.
    fn save_tokens(&self, tokens: &TokenPair) -> AppResult<()> {
        self.set(SessionSlot::AccessToken, &tokens.access_token)?;
        self.set(SessionSlot::RefreshToken, &tokens.refresh_token)
    }
}

impl<T: SessionStore + ?Sized> SessionStoreExt for T {}

/// In-memory store backed by a `DashMap`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: DashMap<SessionSlot, String>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, slot: SessionSlot) -> Option<String> {
        self.slots.get(&slot).map(|v| v.value().clone())
    }

    fn set(&self, slot: SessionSlot, value: &str) -> AppResult<()> {
        self.slots.insert(slot, value.to_string());
        Ok(())
    }

    fn remove(&self, slot: SessionSlot) -> AppResult<()> {
        self.slots.remove(&slot);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.slots.clear();
        Ok(())
    }
}
