//! Admin session commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;

use f3s_auth::jwt::codec;
use f3s_auth::{LoginCredentials, SessionState};
use f3s_core::error::AppError;

use super::Console;
use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and store the session
    Login {
        /// Username (will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the stored session
    Status,
    /// Rotate the token pair now
    Refresh,
}

#[derive(Debug, Serialize)]
struct SessionStatus {
    state: SessionState,
    username: Option<String>,
    name: Option<String>,
    roles: Vec<String>,
    expires_at: Option<DateTime<Utc>>,
    seconds_remaining: u64,
}

/// Execute auth commands
pub async fn execute(
    args: &AuthArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let console = Console::open(config_path)?;
    let manager = &console.manager;

    match &args.command {
        AuthCommand::Login { username, password } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Username")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let user = manager
                .login(&LoginCredentials::new(username, password))
                .await?;
            output::print_success(&format!("Signed in as {}", user.display_name()));
        }
        AuthCommand::Logout => {
            if !manager.has_session() {
                output::print_warning("No stored session");
            }
            manager.logout()?;
            output::print_success("Signed out");
        }
        AuthCommand::Status => {
            let user = manager.stored_user();
            let token = manager.access_token();
            let status = SessionStatus {
                state: manager.state(),
                username: user.as_ref().map(|u| u.username.clone()),
                name: user.as_ref().map(|u| u.display_name()),
                roles: user.map(|u| u.roles).unwrap_or_default(),
                expires_at: token
                    .as_deref()
                    .and_then(codec::expiration_time)
                    .and_then(|exp| DateTime::from_timestamp(exp, 0)),
                seconds_remaining: token.as_deref().map_or(0, codec::time_until_expiry),
            };

            let rows = [
                ("State", status.state.to_string()),
                ("User", status.username.clone().unwrap_or_else(|| "-".to_string())),
                ("Name", status.name.clone().unwrap_or_else(|| "-".to_string())),
                ("Roles", status.roles.join(", ")),
                (
                    "Expires at",
                    status
                        .expires_at
                        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                ("Seconds remaining", status.seconds_remaining.to_string()),
            ];
            output::print_item(&status, &rows, format);
        }
        AuthCommand::Refresh => {
            manager.refresh().await?;
            output::print_success("Session refreshed");
        }
    }

    Ok(())
}
