//! Blog posts.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use validator::{Validate, ValidationError};

use f3s_core::AppResult;
use f3s_core::types::{PageRequest, Pagination};

use super::Enveloped;
use crate::client::ApiClient;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not yet visible.
    #[default]
    Draft,
    /// Publicly visible.
    Published,
    /// Hidden but kept.
    Archived,
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(format!("unknown post status '{other}'")),
        }
    }
}

/// Author summary embedded in a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Category summary embedded in a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// A post as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub author: Option<PostAuthor>,
    #[serde(default)]
    pub category: Option<PostCategory>,
}

/// One page of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    pub pagination: Option<Pagination>,
}

impl PostPage {
    /// Total matching posts, or the page size when the backend omits it.
    pub fn total(&self) -> u64 {
        self.pagination
            .as_ref()
            .map(|p| p.total)
            .unwrap_or(self.posts.len() as u64)
    }
}

/// Filters for listing posts.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub page: PageRequest,
    pub category_id: Option<String>,
    pub status: Option<PostStatus>,
}

impl PostQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.page.to_string()),
            ("limit", self.page.limit.to_string()),
        ];
        if let Some(category_id) = self.category_id.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostInput {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Sent as `null` when blank.
    #[serde(default)]
    pub category_id: Option<String>,
}

impl PostInput {
    /// Blank category IDs become `None`.
    pub fn normalized(mut self) -> Self {
        self.category_id = self.category_id.filter(|c| !c.trim().is_empty());
        self
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Title is required")));
    }
    Ok(())
}

#[derive(Deserialize)]
struct PostBody {
    post: Post,
}

/// `posts` resource.
#[derive(Debug, Clone)]
pub struct PostsApi {
    client: ApiClient,
}

impl PostsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists posts matching `query`.
    pub async fn list(&self, query: &PostQuery) -> AppResult<PostPage> {
        let page: Enveloped<PostPage> = self
            .client
            .get_with_query("posts", &query.to_pairs())
            .await?;
        Ok(page.into_inner())
    }

    /// Fetches one post.
    pub async fn get(&self, id: &str) -> AppResult<Post> {
        let body: Enveloped<PostBody> = self.client.get(&format!("posts/{id}")).await?;
        Ok(body.into_inner().post)
    }

    /// Creates a post and returns the backend's response body.
    pub async fn create(&self, input: PostInput) -> AppResult<Value> {
        input.validate()?;
        let input = input.normalized();
        let created: Value = self.client.post("posts", &input).await?;
        info!(title = %input.title, "Post created");
        Ok(created)
    }

    /// Replaces a post.
    pub async fn update(&self, id: &str, input: PostInput) -> AppResult<Value> {
        input.validate()?;
        let updated: Value = self
            .client
            .put(&format!("posts/{id}"), &input.normalized())
            .await?;
        info!(post_id = %id, "Post updated");
        Ok(updated)
    }

    /// Deletes a post.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let _: Value = self.client.delete(&format!("posts/{id}")).await?;
        info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
