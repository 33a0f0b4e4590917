use std::fs;
use std::io;
use std::path::{Component, Path};

use crate::error::{Result, SetupError};

/// Unpacks `archive_path` under `dest_dir`, creating directories as needed.
/// Entries whose names would land outside `dest_dir` abort the extraction.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path).map_err(|source| SetupError::Archive {
        path: archive_path.to_path_buf(),
        reason: format!("open: {source}"),
    })?;
    let mut zip = zip::ZipArchive::new(file).map_err(|source| SetupError::Archive {
        path: archive_path.to_path_buf(),
        reason: source.to_string(),
    })?;

    fs::create_dir_all(dest_dir).map_err(|source| SetupError::Io {
        action: "create",
        path: dest_dir.to_path_buf(),
        source,
    })?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|source| SetupError::Archive {
            path: archive_path.to_path_buf(),
            reason: source.to_string(),
        })?;
        let name = entry.name().to_owned();

        let rel = Path::new(&name);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(SetupError::Archive {
                path: archive_path.to_path_buf(),
                reason: format!("entry {name:?} escapes the destination directory"),
            });
        }

        let out_path = dest_dir.join(rel);
        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|source| SetupError::Io {
                action: "create",
                path: out_path.clone(),
                source,
            })?;
            apply_unix_mode(&out_path, entry.unix_mode())?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|source| SetupError::Io {
                action: "create",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut out_file = fs::File::create(&out_path).map_err(|source| SetupError::Io {
            action: "create",
            path: out_path.clone(),
            source,
        })?;
        io::copy(&mut entry, &mut out_file).map_err(|source| SetupError::Io {
            action: "write",
            path: out_path.clone(),
            source,
        })?;
        apply_unix_mode(&out_path, entry.unix_mode())?;
    }

    Ok(())
}

#[cfg(unix)]
fn apply_unix_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
            SetupError::Io {
                action: "chmod",
                path: path.to_path_buf(),
                source,
            }
        })?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_unix_mode(_path: &Path, _mode: Option<u32>) -> Result<()> {
    Ok(())
}
