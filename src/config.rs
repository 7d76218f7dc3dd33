//! Command-line configuration shared by the front-ends.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe with a move history you can rewind.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directives (e.g. "ttt_rewind=debug"). Defaults to RUST_LOG
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn env_filter(&self, default: &str) -> EnvFilter {
        if let Some(directives) = &self.log_filter {
            return EnvFilter::new(directives);
        }
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default))
    }

    /// Install the global subscriber. Logs go to `--log-file`, then `default_file`,
    /// then stderr.
    pub fn init_logging(
        &self,
        default_file: Option<&Path>,
        default_filter: &str,
    ) -> io::Result<()> {
        let filter = self.env_filter(default_filter);

        // try_init: a subscriber may already be installed (tests, embedding)
        match self.log_file.as_deref().or(default_file) {
            Some(path) => {
                let log_file = File::create(path)?;
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false)
                    .try_init();
            }
            None => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(io::stderr)
                    .try_init();
            }
        }
        Ok(())
    }
}
