//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use f3s_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            if config.backend.federated_token.is_some() {
                config.backend.federated_token = Some("****".to_string());
            }
            let rows = [
                ("Server", format!("{}:{}", config.server.host, config.server.port)),
                ("Site origin", config.site.origin.clone()),
                (
                    "Backend",
                    format!("{}{}", config.backend.base_url, config.backend.api_prefix),
                ),
                ("Session file", config.session.store_path.clone()),
                ("Catalog", config.catalog.data_dir.clone()),
                ("Assistant", config.assistant.url.clone()),
                ("Log level", config.logging.level.clone()),
            ];
            output::print_item(&config, &rows, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Server", &format!("{}:{}", config.server.host, config.server.port));
                output::print_kv("Backend", &config.backend.base_url);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
