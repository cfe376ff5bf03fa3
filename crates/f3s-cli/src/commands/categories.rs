//! Blog category commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use f3s_client::resources::categories::ALL_CATEGORIES_LIMIT;
use f3s_client::resources::CategoriesApi;
use f3s_core::error::AppError;

use super::Console;
use crate::output::{self, OutputFormat};

/// Arguments for category commands
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    List {
        /// Maximum number of categories
        #[arg(long, default_value_t = ALL_CATEGORIES_LIMIT)]
        limit: u64,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    id: String,
    name: String,
    slug: String,
    active: bool,
}

/// Execute category commands
pub async fn execute(
    args: &CategoriesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let console = Console::open(config_path)?;
    console.require_session().await?;
    let categories = CategoriesApi::new(console.client.clone());

    match &args.command {
        CategoriesCommand::List { limit } => {
            let rows: Vec<CategoryRow> = categories
                .list(*limit)
                .await?
                .into_iter()
                .map(|c| CategoryRow {
                    id: c.id,
                    name: c.name,
                    slug: c.slug,
                    active: c.is_active,
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
