//! Document Search Main Entry Point
//!
//! Command-line adapter for indexing, de-indexing, searching and rating PDF
//! documents in an AWS Kendra index.

use clap::Parser;
use dotenv::dotenv;
use document_search::cli::Cli;
use document_search::{commands, AdapterError, Dependencies, Settings};
use std::env;
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout only carries command output.
fn init_tracing() -> Result<(), AdapterError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("document_search=info,document_search_repository=info")
    });

    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_writer(io::stderr),
            )
            .try_init()
            .map_err(|e| AdapterError::config(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .try_init()
            .map_err(|e| AdapterError::config(format!("Failed to initialize tracing: {}", e)))?;
    }

    info!(
        service_name = "document-search",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AdapterError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    let cli = Cli::parse();
    let settings = Settings::from_env().with_overrides(cli.region, cli.index_id);

    let deps = match Dependencies::new(settings).await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match commands::run(&deps.service, &deps.settings, cli.command, io::stdin()).await {
        Ok(Some(response)) => {
            let rendered = serde_json::to_string_pretty(&response)
                .map_err(|e| AdapterError::output(e.to_string()))?;
            println!("{}", rendered);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) if e.is_caller_error() => {
            warn!(error = %e, "Command rejected");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}
