//! `ramadan-cli` -- command-line front end to the Ramadan Helper backend.
//!
//! Every subcommand maps to one gateway call and prints the decoded
//! payload as pretty JSON.
//!
//! # Environment variables
//!
//! | Variable                   | Default                     | Description                     |
//! |----------------------------|-----------------------------|---------------------------------|
//! | `RAMADAN_API_BASE_URL`     | `http://localhost:8000/api` | Backend base URL                |
//! | `RAMADAN_API_TIMEOUT_SECS` | --                          | Whole-request timeout           |
//! | `RAMADAN_API_HEADERS`      | --                          | Extra headers, `Name: value,..` |
//! | `RAMADAN_USER_EMAIL`       | --                          | Default `--email`               |
//!
//! All of them are optional.

mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ramadan_gateway::{GatewayClient, GatewayConfig};

use commands::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ramadan_cli=info,ramadan_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GatewayConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::debug!(base_url = %config.normalized_base_url(), "Loaded gateway configuration");

    let client = GatewayClient::new(config)?;
    commands::execute(&client, cli.command).await
}
