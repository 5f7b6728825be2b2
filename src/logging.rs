//! Logger setup for the terminal runner.
//!
//! The screen is in raw mode while the game runs, so log lines on stderr would
//! tear through the board. With a log path, records are appended to that file
//! at `info` by default; without one, logging stays off unless `RUST_LOG` asks
//! for it.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&str>) -> Result<()> {
    let default_filter = if log_path.is_some() { "info" } else { "off" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format_timestamp_millis();

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}
