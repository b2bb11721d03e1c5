use backend_lib::{config::Settings, http_router, store::FlatFileAccountStore, AppState};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "gatekeeper credential-issuing service")]
struct Args {
    /// Path to the config file (defaults to config/default.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize configuration
    let config = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Create storage
    let storage = FlatFileAccountStore::new(&config.data_dir)?;

    // Create application state and router
    let addr = config.bind_addr;
    let state = Arc::new(AppState::new(Arc::new(storage), config));
    let app = http_router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
