//! Modkit CLI binary.
//!
//! This is the entry point for the `modkit` command-line tool. It initializes
//! logging via `tracing`, parses arguments with `clap`, and dispatches to
//! the appropriate command handler.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let fallback = default_log_filter();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();

    let args = cli::parse();
    commands::dispatch(args)
}

/// Filter used when `RUST_LOG` is unset: an optional `log-filter` from the
/// nearest `Modkit.toml`, then `"warn"`.
fn default_log_filter() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| modkit_core::config::HostConfig::discover(&cwd).ok())
        .and_then(|config| config.host.log_filter)
        .unwrap_or_else(|| "warn".to_string())
}
