//! Shared start-up for the Parlour binaries: logging and config.
//!
//! ```text
//! main() -> init_tracing() -> load_config() -> parlour_core::<game>::run(stdio)
//! ```
//!
//! Stdout belongs to the game transcript, so logs only ever go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::iter;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use parlour_config::{ParlourConfig, parlour_dir};

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let opened = log_file_candidates()
        .into_iter()
        .find_map(|path| open_log_file(&path).ok().map(|file| (path, file)));

    match opened {
        Some((path, file)) => {
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        // No log file: drop logs rather than interleave them with the game.
        None => registry.init(),
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `~/.parlour/logs/parlour.log`, then `./.parlour/logs/parlour.log`.
fn log_file_candidates() -> Vec<PathBuf> {
    parlour_dir()
        .into_iter()
        .chain(iter::once(PathBuf::from(".parlour")))
        .map(|dir| dir.join("logs").join("parlour.log"))
        .collect()
}

/// Load the optional config file, falling back to defaults on any problem.
///
/// A broken config never stops a game; the failure is logged instead.
#[must_use]
pub fn load_config() -> ParlourConfig {
    match ParlourConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => ParlourConfig::default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            ParlourConfig::default()
        }
    }
}
