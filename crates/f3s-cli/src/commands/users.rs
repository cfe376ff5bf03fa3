//! Backend user commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use f3s_client::resources::UsersApi;
use f3s_core::error::AppError;

use super::Console;
use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UsersArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UsersCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all users
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Roles
    roles: String,
    /// Active
    active: bool,
}

/// Execute user commands
pub async fn execute(
    args: &UsersArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let console = Console::open(config_path)?;
    console.require_session().await?;
    let users = UsersApi::new(console.client.clone());

    match &args.command {
        UsersCommand::List { role } => {
            let rows: Vec<UserRow> = users
                .list()
                .await?
                .into_iter()
                .filter(|u| role.as_ref().is_none_or(|r| u.roles.contains(r)))
                .map(|u| UserRow {
                    id: u.id,
                    username: u.username,
                    email: u.email,
                    roles: u.roles.join(", "),
                    active: u.is_active,
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
