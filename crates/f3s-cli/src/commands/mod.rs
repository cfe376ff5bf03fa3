//! CLI command definitions and dispatch.

pub mod auth;
pub mod categories;
pub mod comments;
pub mod config;
pub mod generate;
pub mod posts;
pub mod serve;
pub mod users;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use f3s_auth::{FileSessionStore, GuardState, RouteGuard, SessionManager, SessionStore};
use f3s_client::{ApiClient, HttpAuthBackend, StaticTokenSource};
use f3s_core::config::AppConfig;
use f3s_core::error::AppError;

use crate::output::OutputFormat;

/// F3S Software site: server and admin console
#[derive(Debug, Parser)]
#[command(name = "f3s", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Sign in, sign out, and inspect the admin session
    Auth(auth::AuthArgs),
    /// Blog post management
    Posts(posts::PostsArgs),
    /// Blog categories
    Categories(categories::CategoriesArgs),
    /// Backend users
    Users(users::UsersArgs),
    /// Post comments
    Comments(comments::CommentsArgs),
    /// Random data generators
    Generate(generate::GenerateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Auth(args) => auth::execute(args, &self.config, self.format).await,
            Commands::Posts(args) => posts::execute(args, &self.config, self.format).await,
            Commands::Categories(args) => {
                categories::execute(args, &self.config, self.format).await
            }
            Commands::Users(args) => users::execute(args, &self.config, self.format).await,
            Commands::Comments(args) => comments::execute(args, &self.config, self.format).await,
            Commands::Generate(args) => generate::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Backend client and session wired over the persistent session file.
pub struct Console {
    pub config: AppConfig,
    pub client: ApiClient,
    pub manager: Arc<SessionManager>,
}

impl Console {
    /// Builds the console from the configuration at `config_path`.
    pub fn open(config_path: &str) -> Result<Self, AppError> {
        let config = load_config(config_path)?;

        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(&config.session.store_path));

        let mut client = ApiClient::new(config.backend.clone(), Arc::clone(&store))?;
        if let Some(source) =
            StaticTokenSource::from_config(config.backend.federated_token.as_deref())
        {
            client = client.with_federated(Arc::new(source));
        }

        let backend = Arc::new(HttpAuthBackend::new(client.clone()));
        let manager = Arc::new(SessionManager::new(
            store,
            backend,
            config.session.clone(),
        ));

        Ok(Self {
            config,
            client,
            manager,
        })
    }

    /// Localized admin login route.
    pub fn login_route(&self) -> String {
        self.config
            .site
            .login_route(&self.config.site.default_locale)
    }

    /// Runs the route guard for an admin command and tops up a token that
    /// is close to expiry.
    pub async fn require_session(&self) -> Result<(), AppError> {
        let guard = RouteGuard::new(Arc::clone(&self.manager), self.login_route());

        match guard.check().await {
            GuardState::Authenticated => {
                if self.manager.valid_token().await.is_none() {
                    return Err(AppError::session(
                        "Session expired. Run `f3s auth login` to sign in again.",
                    ));
                }
                Ok(())
            }
            GuardState::Redirect(route) => Err(AppError::unauthorized(format!(
                "Not signed in (login page: {route}). Run `f3s auth login` first."
            ))),
            GuardState::Loading => Err(AppError::internal("Session check did not settle")),
        }
    }
}
