//! Post comment commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use f3s_client::resources::CommentsApi;
use f3s_core::error::AppError;

use super::Console;
use crate::output::{self, OutputFormat};

/// Arguments for comment commands
#[derive(Debug, Args)]
pub struct CommentsArgs {
    /// Comment subcommand
    #[command(subcommand)]
    pub command: CommentsCommand,
}

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentsCommand {
    /// List the comments of a post
    List {
        /// Post ID
        post_id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct CommentRow {
    id: String,
    author: String,
    content: String,
    approved: bool,
    created_at: String,
}

/// Execute comment commands
pub async fn execute(
    args: &CommentsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let console = Console::open(config_path)?;
    console.require_session().await?;
    let comments = CommentsApi::new(console.client.clone());

    match &args.command {
        CommentsCommand::List { post_id } => {
            let rows: Vec<CommentRow> = comments
                .list_for_post(post_id)
                .await?
                .into_iter()
                .map(|c| CommentRow {
                    id: c.id,
                    author: c.author_name,
                    content: output::truncate(&c.content, 60),
                    approved: c.is_approved,
                    created_at: c.created_at.unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
