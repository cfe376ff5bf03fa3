//! Start the F3S HTTP server.

use clap::Args;

use f3s_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the catalog data directory
    #[arg(long)]
    pub data_dir: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref data_dir) = args.data_dir {
        config.catalog.data_dir = data_dir.clone();
    }

    tracing::debug!(config = %config_path, "Loaded server configuration");

    println!("Starting F3S server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Catalog: {}", config.catalog.data_dir);

    f3s_api::run_server(config).await
}
