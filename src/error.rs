use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = SetupError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("download failed for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unusable archive {}: {reason}", .path.display())]
    Archive { path: PathBuf, reason: String },

    #[error("{command} failed: {reason}")]
    Exec { command: String, reason: String },

    #[error("cannot resolve {what}: {reason}")]
    PathResolution { what: &'static str, reason: String },
}
