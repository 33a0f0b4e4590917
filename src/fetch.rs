use std::io;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, SetupError};

/// Downloads `url` into a fresh temp file. The file is deleted when the
/// returned handle drops, so callers extract from it before letting go.
pub fn download_to_temp(url: &str) -> Result<NamedTempFile> {
    let mut resp = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .map_err(|source| SetupError::Network {
            url: url.to_string(),
            source,
        })?;

    let mut file = tempfile::Builder::new()
        .prefix("pychess-setup-")
        .suffix(".zip")
        .tempfile()
        .map_err(|source| SetupError::Io {
            action: "create",
            path: std::env::temp_dir(),
            source,
        })?;

    let bytes = io::copy(&mut resp, &mut file).map_err(|source| SetupError::Io {
        action: "write",
        path: file.path().to_path_buf(),
        source,
    })?;
    debug!("downloaded {bytes} bytes from {url}");

    Ok(file)
}
