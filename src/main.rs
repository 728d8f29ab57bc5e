use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use discogs_import::config::Config;
use discogs_import::discogs::DiscogsClient;
use discogs_import::import::{read_batch, ImportError, ImportSession, FATAL_EXIT_STATUS};

/// Import albums into a Discogs collection folder from a CSV file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the CSV file
    #[arg(default_value = "discogs_export.csv")]
    csv_file: PathBuf,

    /// Target collection folder (overrides DISCOGS_COLLECTION_FOLDER)
    #[arg(short, long)]
    folder: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env may set RUST_LOG, so load it before the subscriber reads the filter
    let _ = dotenvy::dotenv();

    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let args = Args::parse();

    match run(args).await {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::from(FATAL_EXIT_STATUS)
        }
    }
}

async fn run(args: Args) -> Result<u8, ImportError> {
    let config = Config::load(args.folder)?;

    // Read the batch before any remote call so a bad path fails fast
    let requests = read_batch(&args.csv_file)?;

    let mut client = DiscogsClient::new(
        config.token.clone(),
        config.user_agent.clone(),
        config.username.clone(),
    );
    if let Some(api_url) = &config.api_url {
        client = client.with_base_url(api_url.as_str());
    }

    let mut session = ImportSession::new(&client, config.policy);
    let (folder, outcome) = session.import(&requests, &config.collection_folder).await?;

    info!(
        "{} attempted, {} already present, {} failed, {} skipped",
        outcome.attempted, outcome.duplicates, outcome.failed, outcome.skipped
    );
    println!(
        "\n✅ Import completed: {}/{} albums added to '{}'.",
        outcome.succeeded, outcome.total_rows, folder.name
    );

    Ok(outcome.exit_status())
}
