//! Typed clients for the backend's CRUD resources.
//!
//! Some backend routes wrap their payload in `{"data": ...}` and some do
//! not; [`Enveloped`] accepts both.

pub mod categories;
pub mod comments;
pub mod posts;
pub mod users;

use serde::Deserialize;

pub use categories::{CategoriesApi, Category};
pub use comments::{Comment, CommentsApi};
pub use posts::{Post, PostInput, PostPage, PostQuery, PostStatus, PostsApi};
pub use users::{User, UsersApi};

/// A payload that may or may not be wrapped in a `data` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}
