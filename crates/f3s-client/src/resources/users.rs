//! Backend users.

use serde::{Deserialize, Serialize};

use f3s_core::AppResult;

use super::Enveloped;
use crate::client::ApiClient;

/// A backend user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserList {
    Keyed { users: Vec<User> },
    Plain(Vec<User>),
}

/// `users` resource.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists every user visible to the caller.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let body: Enveloped<UserList> = self.client.get("users").await?;
        Ok(match body.into_inner() {
            UserList::Keyed { users } => users,
            UserList::Plain(users) => users,
        })
    }
}
