//! CLI module for quill
//!
//! Process bootstrap lives here: argument parsing, tracing init, config
//! resolution, opening the store, and running the server. A store that
//! cannot be opened at startup is fatal; the process exits non-zero.

mod args;

pub use args::{Cli, Command};

use thiserror::Error;

use crate::config::{parse_listen, ServerConfig};
use crate::http_api::HttpServer;
use crate::store::{StoreError, StoreTarget};

/// CLI errors, all fatal
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid listen address '{0}' (expected host:port)")]
    InvalidListenAddr(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Entry point called from main.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { listen, store_url } => serve(listen, store_url),
    }
}

fn serve(listen: Option<String>, store_url: Option<String>) -> CliResult<()> {
    init_tracing();

    let mut config = ServerConfig::from_env();
    if let Some(listen) = listen {
        let (host, port) =
            parse_listen(&listen).ok_or_else(|| CliError::InvalidListenAddr(listen.clone()))?;
        config.host = host;
        config.port = port;
    }
    if let Some(url) = store_url {
        config.store_url = url;
    }

    let target: StoreTarget = config.store_url.parse()?;
    let store = target.open()?;
    tracing::info!(store = %target, "opened post store");

    let server = HttpServer::new(config, store);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let handle = server.start().await?;
        handle.join().await
    })?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init: tests may install their own subscriber first
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
