//! Blog post management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use f3s_client::resources::{Post, PostInput, PostQuery, PostStatus, PostsApi};
use f3s_core::error::AppError;
use f3s_core::types::PageRequest;

use super::Console;
use crate::output::{self, OutputFormat};

/// Arguments for post commands
#[derive(Debug, Args)]
pub struct PostsArgs {
    /// Post subcommand
    #[command(subcommand)]
    pub command: PostsCommand,
}

/// Fields shared by create and update.
#[derive(Debug, Args)]
pub struct PostFields {
    /// Title
    #[arg(short, long)]
    pub title: String,
    /// Body text
    #[arg(long, default_value = "")]
    pub content: String,
    /// Short summary
    #[arg(long, default_value = "")]
    pub excerpt: String,
    /// Featured image URL
    #[arg(long, default_value = "")]
    pub featured_image: String,
    /// draft, published, or archived
    #[arg(short, long, default_value = "draft")]
    pub status: PostStatus,
    /// Category ID
    #[arg(long)]
    pub category_id: Option<String>,
}

impl From<&PostFields> for PostInput {
    fn from(fields: &PostFields) -> Self {
        Self {
            title: fields.title.clone(),
            content: fields.content.clone(),
            excerpt: fields.excerpt.clone(),
            featured_image: fields.featured_image.clone(),
            status: fields.status,
            category_id: fields.category_id.clone(),
        }
    }
}

/// Post subcommands
#[derive(Debug, Subcommand)]
pub enum PostsCommand {
    /// List posts
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Posts per page
        #[arg(long, default_value = "10")]
        limit: u64,
        /// Filter by category ID
        #[arg(long)]
        category_id: Option<String>,
        /// Filter by status
        #[arg(long)]
        status: Option<PostStatus>,
    },
    /// Show one post
    Show {
        /// Post ID
        id: String,
    },
    /// Create a post
    Create(PostFields),
    /// Replace a post
    Update {
        /// Post ID
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    /// Delete a post
    Delete {
        /// Post ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Post display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PostRow {
    /// Post ID
    id: String,
    /// Title
    title: String,
    /// Status
    status: String,
    /// Category
    category: String,
    /// Author
    author: String,
    /// Created at
    created_at: String,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: output::truncate(&post.title, 48),
            status: post.status.to_string(),
            category: post
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            author: post
                .author
                .as_ref()
                .map(|a| a.username.clone())
                .unwrap_or_else(|| "-".to_string()),
            created_at: post.created_at.clone().unwrap_or_default(),
        }
    }
}

/// Execute post commands
pub async fn execute(
    args: &PostsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let console = Console::open(config_path)?;
    console.require_session().await?;
    let posts = PostsApi::new(console.client.clone());

    match &args.command {
        PostsCommand::List {
            page,
            limit,
            category_id,
            status,
        } => {
            let query = PostQuery {
                page: PageRequest::new(*page, *limit),
                category_id: category_id.clone(),
                status: *status,
            };
            let result = posts.list(&query).await?;

            match format {
                OutputFormat::Json => output::print_json(&result),
                OutputFormat::Table => {
                    let rows: Vec<PostRow> = result.posts.iter().map(PostRow::from).collect();
                    output::print_list(&rows, format);
                    println!("Total: {}", result.total());
                }
            }
        }
        PostsCommand::Show { id } => {
            let post = posts.get(id).await?;
            let rows = [
                ("ID", post.id.clone()),
                ("Title", post.title.clone()),
                ("Slug", post.slug.clone()),
                ("Status", post.status.to_string()),
                ("Published", post.is_published.to_string()),
                ("Excerpt", post.excerpt.clone()),
                (
                    "Content",
                    output::truncate(post.content.as_deref().unwrap_or_default(), 200),
                ),
            ];
            output::print_item(&post, &rows, format);
        }
        PostsCommand::Create(fields) => {
            let created = posts.create(PostInput::from(fields)).await?;
            match format {
                OutputFormat::Json => output::print_json(&created),
                OutputFormat::Table => {
                    output::print_success(&format!("Post '{}' created", fields.title))
                }
            }
        }
        PostsCommand::Update { id, fields } => {
            let updated = posts.update(id, PostInput::from(fields)).await?;
            match format {
                OutputFormat::Json => output::print_json(&updated),
                OutputFormat::Table => output::print_success(&format!("Post '{}' updated", id)),
            }
        }
        PostsCommand::Delete { id, yes } => {
            let confirmed = *yes
                || dialoguer::Confirm::new()
                    .with_prompt(format!("Delete post '{}'?", id))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

            if !confirmed {
                output::print_warning("Aborted");
                return Ok(());
            }

            posts.delete(id).await?;
            output::print_success(&format!("Post '{}' deleted", id));
        }
    }

    Ok(())
}
