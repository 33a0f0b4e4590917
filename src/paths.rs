use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{Result, SetupError};

/// Env override used during development to point at a checkout instead of
/// the directory the executable sits in.
pub const ROOT_ENV: &str = "PYCHESS_SETUP_ROOT";

pub fn base_dir() -> Result<PathBuf> {
    if let Ok(dev_root) = std::env::var(ROOT_ENV) {
        return Ok(PathBuf::from(dev_root));
    }
    let exe = std::env::current_exe().map_err(|source| SetupError::PathResolution {
        what: "base directory",
        reason: format!("current_exe: {source}"),
    })?;
    let parent = exe.parent().ok_or_else(|| SetupError::PathResolution {
        what: "base directory",
        reason: format!("{} has no parent directory", exe.display()),
    })?;
    Ok(parent.to_path_buf())
}

pub fn resolve_app_script(base: &Path) -> Result<PathBuf> {
    let script = base.join(config::APP_SCRIPT);
    if !script.is_file() {
        return Err(SetupError::PathResolution {
            what: "application script",
            reason: format!("{} not found", script.display()),
        });
    }
    Ok(script)
}

pub fn stockfish_dir(base: &Path) -> PathBuf {
    base.join("stockfish-windows-x86-64-avx2").join("stockfish")
}

pub fn stockfish_exe(base: &Path) -> PathBuf {
    stockfish_dir(base).join("stockfish-windows-x86-64-avx2.exe")
}

/// Picks the interpreter used for the shortcut target and the launch.
/// `pythonw` keeps the console window away on Windows; plain `python` is the
/// fallback, and the bare name is left for PATH lookup at spawn time when
/// neither can be found now.
pub fn find_python() -> PathBuf {
    resolve_python(|name| which::which(name).ok())
}

fn resolve_python(lookup: impl Fn(&str) -> Option<PathBuf>) -> PathBuf {
    for candidate in ["pythonw", "python"] {
        if let Some(path) = lookup(candidate) {
            return path;
        }
    }
    PathBuf::from("python")
}
