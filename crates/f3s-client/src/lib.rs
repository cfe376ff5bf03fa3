//! # f3s-client
//!
//! Typed HTTP access to the versioned F3S REST backend.
//!
//! [`ApiClient`] attaches the current bearer token, places relative
//! endpoints under the API prefix, and turns non-2xx responses into
//! classified [`AppError`](f3s_core::AppError)s. The resource clients and the
//! auth backend are thin layers over it.

pub mod assistant;
pub mod auth;
pub mod client;
pub mod error;
pub mod resources;
pub mod token;

pub use assistant::{AssistantClient, AssistantMessage, AssistantReply, AssistantUi};
pub use auth::HttpAuthBackend;
pub use client::{ApiClient, normalize_endpoint};
pub use resources::{CategoriesApi, CommentsApi, PostsApi, UsersApi};
pub use token::{FederatedTokenSource, StaticTokenSource};

#[cfg(test)]
pub(crate) mod test_support;
