use std::path::Path;
use tracing::info;

use crate::archive;
use crate::error::{Result, SetupError};
use crate::fetch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    AlreadyPresent,
    Installed,
}

/// Makes sure the engine binary exists at `expected`. Nothing touches the
/// network when it already does; otherwise the release archive is downloaded
/// and unpacked under `dest_dir`.
pub fn ensure_stockfish(expected: &Path, url: &str, dest_dir: &Path) -> Result<EnsureOutcome> {
    if expected.is_file() {
        return Ok(EnsureOutcome::AlreadyPresent);
    }

    info!("downloading stockfish from {url}");
    let archive_file = fetch::download_to_temp(url)?;
    archive::extract_zip(archive_file.path(), dest_dir)?;

    if !expected.is_file() {
        return Err(SetupError::Archive {
            path: archive_file.path().to_path_buf(),
            reason: format!("{} missing after extraction", expected.display()),
        });
    }

    Ok(EnsureOutcome::Installed)
}
