//! Prints the assembled feed of one broadcast as JSON.
//!
//! Usage:
//!
//! ```text
//! feed_dump [--config PATH] [--database-url URL] [--strict] ARTICLE_ID
//! ```
//!
//! Log output goes to stderr and honours `RUST_LOG` (default `info`).

use broadcast_content::config::{ConfigError, ContentConfig};
use broadcast_content::content::{
    adapters::postgres::PostgresContentRepository,
    services::{BroadcastFeedService, FeedPolicy, FeedServiceError},
};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "feed_dump", about = "Print a broadcast feed as JSON")]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// `PostgreSQL` URL; overrides the configuration file and environment.
    #[arg(long)]
    database_url: Option<String>,

    /// Fail instead of printing a feed with undecodable rows.
    #[arg(long)]
    strict: bool,

    /// Article id of the broadcast.
    article_id: String,
}

/// Errors that end the command.
#[derive(Debug, Error)]
enum DumpError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Feed(#[from] FeedServiceError),
    #[error("failed to encode feed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write feed: {0}")]
    Write(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "feed_dump failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), DumpError> {
    let mut config = ContentConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    let policy = if cli.strict {
        FeedPolicy::RejectDegraded
    } else {
        config.feed_policy()
    };

    let pool = config.build_pool()?;
    let service = BroadcastFeedService::new(Arc::new(PostgresContentRepository::new(pool)), policy);
    let feed = service.load_feed(&cli.article_id).await?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &feed)?;
    writeln!(stdout)?;
    Ok(())
}
