//! Random data generator commands. These run locally and need no session.

use clap::{Args, Subcommand};

use f3s_core::error::AppError;
use f3s_service::{GeneratorService, JwtGeneratorConfig};

use crate::output::{self, OutputFormat};

/// Arguments for generate commands
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generator subcommand
    #[command(subcommand)]
    pub command: GenerateCommand,
}

/// Generator subcommands
#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Random v4 UUID
    Uuid,
    /// Random password
    Password {
        /// Length (clamped to the configured bounds)
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Adjective + noun username
    Username {
        /// Leave off the two-digit suffix
        #[arg(long)]
        no_number: bool,
    },
    /// Fictional US address
    Address,
    /// Sample JWT
    Jwt {
        /// HS256, HS384, HS512, RS256, RS384, RS512, ES256, ES384, or ES512
        #[arg(short, long, default_value = "HS256")]
        algorithm: String,
        /// Lifetime in seconds
        #[arg(short, long, default_value_t = 3600)]
        expires_in: i64,
        /// Add a not-before claim
        #[arg(long)]
        nbf: bool,
        /// Leave out iss, aud, and sub
        #[arg(long)]
        minimal: bool,
    },
}

/// Execute generate commands
pub async fn execute(
    args: &GenerateArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let generators = GeneratorService::new(config.generators);

    match &args.command {
        GenerateCommand::Uuid => {
            let uuid = generators.uuid();
            print_value("uuid", &uuid, format);
        }
        GenerateCommand::Password { length } => {
            let password = generators.password(*length);
            print_value("password", &password, format);
        }
        GenerateCommand::Username { no_number } => {
            let username = generators.username(!no_number);
            print_value("username", &username, format);
        }
        GenerateCommand::Address => {
            let address = generators.address();
            let rows = [
                ("Street", address.street.clone()),
                ("City", address.city.clone()),
                ("State", address.state.clone()),
                ("ZIP", address.zip_code.clone()),
            ];
            output::print_item(&address, &rows, format);
        }
        GenerateCommand::Jwt {
            algorithm,
            expires_in,
            nbf,
            minimal,
        } => {
            let request = JwtGeneratorConfig {
                algorithm: algorithm.clone(),
                expires_in: *expires_in,
                include_issuer: !minimal,
                include_audience: !minimal,
                include_subject: !minimal,
                include_nbf: *nbf,
                ..JwtGeneratorConfig::default()
            };
            let generated = generators.jwt(&request)?;
            match format {
                OutputFormat::Json => output::print_json(&generated),
                OutputFormat::Table => {
                    println!("{}", generated.jwt);
                    println!();
                    output::print_json(&generated.decoded.header);
                    output::print_json(&generated.decoded.payload);
                }
            }
        }
    }

    Ok(())
}

fn print_value(key: &str, value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let mut body = serde_json::Map::new();
            body.insert(key.to_string(), value.into());
            output::print_json(&body);
        }
        OutputFormat::Table => println!("{}", value),
    }
}
