pub mod heroes;
pub mod messages;
pub mod mock;
pub mod models;
pub mod service;

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Base URL of the hero web api. Overridable via `HEROES_API_URL`.
pub fn default_api_url() -> String {
    std::env::var("HEROES_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8787/api/heroes".to_string())
}

/// Set up the subscriber: compact stdout output, plus an optional
/// no-ANSI file layer when a log path is given.
pub fn init_tracing(log_path: Option<&str>) -> anyhow::Result<()> {
    let file_layer = match log_path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false)
                    .compact(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("herodex=debug".parse()?))
        .with(file_layer)
        .with(fmt::layer().compact())
        .init();

    Ok(())
}
