use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use inframirror::config::ServerConfig;
use inframirror::db;
use inframirror::search::SearchIndex;
use inframirror::web;

#[derive(Parser, Debug)]
#[command(name = "inframirror-server", about = "InfraMirror catalog API server")]
struct Cli {
    /// Overrides LISTEN_ADDR from the environment.
    #[arg(long)]
    listen: Option<String>,
}

fn init_logging() {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily("logs", "server.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    // Log to stdout: human-readable format
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    // Filter based on RUST_LOG, default to `info`.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    let db = db::connect(&config.database_url).await?;
    db::schema::init_schema(&db).await?;

    let search = Arc::new(SearchIndex::new());
    db::services::rebuild_search_index(&db, &search).await?;
    let app_router = web::create_axum_router(db, search);

    info!(addr = %config.listen_addr, "InfraMirror API server listening");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app_router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received.");
        })
        .await?;

    Ok(())
}
