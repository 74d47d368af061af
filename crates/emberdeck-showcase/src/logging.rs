#![forbid(unsafe_code)]

//! Subscriber setup for the binary.
//!
//! Stdout belongs to the presenter, so events go to a file.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ShowcaseError;

pub const DEFAULT_FILTER: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "emberdeck.log";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LogConfig {
    /// Defaults overridden by `EMBERDECK_LOG` and `EMBERDECK_LOG_FILE`.
    pub fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = var("EMBERDECK_LOG") {
            config.filter = filter;
        }
        if let Some(file) = var("EMBERDECK_LOG_FILE") {
            config.file = PathBuf::from(file);
        }
        config
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ShowcaseError> {
        EnvFilter::try_new(&self.filter).map_err(|err| ShowcaseError::LogFilter(err.to_string()))
    }
}

/// Install the global subscriber. A subscriber that is already installed
/// is left in place.
pub fn init(config: &LogConfig) -> Result<(), ShowcaseError> {
    let filter = config.env_filter()?;
    let file = File::create(&config.file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
