#![forbid(unsafe_code)]

//! Showcase error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can stop the showcase.
#[derive(Debug)]
pub enum ShowcaseError {
    /// Terminal or file I/O failed.
    Io(io::Error),
    /// A dialogue file could not be read.
    DialogueFile { path: PathBuf, source: io::Error },
    /// A dialogue payload was not valid JSON for the expected shape.
    Dialogue(serde_json::Error),
    /// A command-line flag or environment override had a bad value.
    InvalidValue { flag: &'static str, value: String },
    /// A command-line argument was not recognised.
    UnknownArgument(String),
    /// The log filter directive could not be parsed.
    LogFilter(String),
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::DialogueFile { path, source } => {
                write!(f, "cannot read dialogue file {}: {source}", path.display())
            }
            Self::Dialogue(err) => write!(f, "invalid dialogue payload: {err}"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            Self::LogFilter(msg) => write!(f, "invalid log filter: {msg}"),
        }
    }
}

impl std::error::Error for ShowcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::DialogueFile { source, .. } => Some(source),
            Self::Dialogue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ShowcaseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Dialogue(err)
    }
}
