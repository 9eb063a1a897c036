//! Crate-wide error type
//!
//! Only session setup can fail. Once a session is running every tick
//! completes deterministically.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced when starting a session or loading data files
#[derive(Debug)]
pub enum GameError {
    /// The hand tracker (camera) could not be opened
    TrackerUnavailable(String),
    /// A config or level file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A config or level file is not valid JSON for its type
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackerUnavailable(reason) => {
                write!(f, "hand tracker unavailable: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TrackerUnavailable(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
