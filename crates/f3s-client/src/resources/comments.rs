//! Post comments.

use serde::{Deserialize, Serialize};

use f3s_core::AppResult;

use super::Enveloped;
use crate::client::ApiClient;

/// A reader comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
struct CommentList {
    #[serde(default)]
    comments: Vec<Comment>,
}

/// `comments` resource.
#[derive(Debug, Clone)]
pub struct CommentsApi {
    client: ApiClient,
}

impl CommentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the comments on one post.
    pub async fn list_for_post(&self, post_id: &str) -> AppResult<Vec<Comment>> {
        let body: Enveloped<CommentList> = self
            .client
            .get_with_query("comments", &[("post_id", post_id.to_string())])
            .await?;
        Ok(body.into_inner().comments)
    }
}
