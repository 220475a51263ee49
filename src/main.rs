//! Simple Service
//!
//! A minimal HTTP service meant to sit behind an API gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                 SIMPLE SERVICE                   │
//!   Gateway request  │  ┌────────────┐   ┌──────────┐   ┌─────────────┐ │
//!   (credential hdr) │  │ request-id │   │  trace   │   │ /api        │ │
//!   ─────────────────┼─▶│  timeout   │──▶│ recorder │──▶│  public     │ │
//!                    │  │  tracing   │   │          │   │  private    │ │
//!                    │  └────────────┘   └────┬─────┘   ├─────────────┤ │
//!                    │                        │         │ /actuator   │ │
//!                    │                        ▼         │  health     │ │
//!                    │                  ┌──────────┐    │  info       │ │
//!                    │                  │  trace   │◀───│  httptrace  │ │
//!                    │                  │  store   │    └─────────────┘ │
//!                    │                  └──────────┘                    │
//!                    │  config (TOML, hot reload) · logging · lifecycle │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use simple_service::config::ConfigWatcher;
use simple_service::lifecycle::{signals, startup, Shutdown};
use simple_service::observability::init_logging;
use simple_service::HttpServer;

#[derive(Parser)]
#[command(name = "simple-service")]
#[command(about = "Public/private demo endpoints behind a credential-injecting gateway", long_about = None)]
struct Cli {
    /// TOML configuration file; watched for changes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = startup::resolve_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!("simple-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        credential_header = %config.credential.header,
        trailing_newline = config.credential.trailing_newline,
        on_missing = ?config.credential.on_missing,
        trace_enabled = config.trace.enabled,
        trace_capacity = config.trace.capacity,
        "Configuration loaded"
    );

    // Keep the watcher alive for the lifetime of the server.
    let (config_updates, _watcher) = match cli.config.as_deref() {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (updates, Some(watcher.run()?))
        }
        None => (tokio::sync::mpsc::unbounded_channel().1, None),
    };

    let listener = startup::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    signals::forward_to(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
