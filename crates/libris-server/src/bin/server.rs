//! libris server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite catalog, seeds it when empty, and serves the HTML views and JSON API
//! over HTTP until interrupted.
//!
//! # Initialising the database only
//!
//! ```sh
//! cargo run -p libris-server --bin server -- --init-db
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use libris_core::BookService;
use libris_server::{AppState, ServerConfig};
use libris_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Libris book catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Create the books table (and seed it if empty), then exit.
  #[arg(long)]
  init_db: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;

  // Open SQLite store. Schema initialisation happens on open.
  let store_path = server_cfg.resolved_database_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = ?store_path, "books table ready");

  let books = BookService::new(Arc::new(store.clone()));

  if server_cfg.seed_sample_data || cli.init_db {
    books
      .seed_if_empty()
      .await
      .context("failed to seed sample books")?;
  }

  if cli.init_db {
    store.close().await.context("failed to close store")?;
    return Ok(());
  }

  let state = AppState { books, config: Arc::new(server_cfg.clone()) };
  let app = libris_server::router(state);
  let address = server_cfg.bind_address();

  tracing::info!(environment = ?server_cfg.environment, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("shutting down, closing store");
  store.close().await.context("failed to close store")?;

  Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
}
