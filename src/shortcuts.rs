use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{Result, SetupError};

#[derive(Debug, Clone)]
pub struct ShortcutSpec {
    pub link_path: PathBuf,
    pub target: PathBuf,
    pub arguments: String,
    pub working_dir: PathBuf,
    pub icon: PathBuf,
}

pub fn default_desktop_dir() -> Result<PathBuf> {
    let profile = std::env::var("USERPROFILE").map_err(|_| SetupError::PathResolution {
        what: "desktop directory",
        reason: "USERPROFILE is not set".to_string(),
    })?;
    Ok(PathBuf::from(profile).join("Desktop"))
}

pub fn link_path(desktop_dir: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(SetupError::PathResolution {
            what: "shortcut path",
            reason: "shortcut name is empty".to_string(),
        });
    }
    Ok(desktop_dir.join(format!("{name}.lnk")))
}

pub fn create_desktop_shortcut(spec: &ShortcutSpec) -> Result<()> {
    create_desktop_shortcut_with_host(spec, |script| Command::new("wscript").arg(script).status())
}

/// Writes the shortcut script to a uniquely named temp file and hands it to
/// the script host. The temp file is removed when the handle drops, whether
/// the host ran or not.
pub fn create_desktop_shortcut_with_host(
    spec: &ShortcutSpec,
    mut run_host: impl FnMut(&Path) -> io::Result<ExitStatus>,
) -> Result<()> {
    let script = shortcut_script(spec)?;

    let mut file = tempfile::Builder::new()
        .prefix("create-link-")
        .suffix(".vbs")
        .tempfile()
        .map_err(|source| SetupError::Io {
            action: "create",
            path: std::env::temp_dir(),
            source,
        })?;
    file.write_all(script.as_bytes())
        .map_err(|source| SetupError::Io {
            action: "write",
            path: file.path().to_path_buf(),
            source,
        })?;

    let status = run_host(file.path()).map_err(|source| SetupError::Exec {
        command: "wscript".to_string(),
        reason: source.to_string(),
    })?;
    if !status.success() {
        return Err(SetupError::Exec {
            command: "wscript".to_string(),
            reason: format!("exit {:?}", status.code()),
        });
    }

    Ok(())
}

pub fn shortcut_script(spec: &ShortcutSpec) -> Result<String> {
    let link = vbs_quote(&spec.link_path.display().to_string())?;
    let target = vbs_quote(&spec.target.display().to_string())?;
    let arguments = vbs_quote(&spec.arguments)?;
    let working_dir = vbs_quote(&spec.working_dir.display().to_string())?;
    let icon = vbs_quote(&spec.icon.display().to_string())?;

    Ok(format!(
        "Set oWS = WScript.CreateObject(\"WScript.Shell\")\n\
         sLinkFile = {link}\n\
         Set oLink = oWS.CreateShortcut(sLinkFile)\n\
         oLink.TargetPath = {target}\n\
         oLink.Arguments = {arguments}\n\
         oLink.WorkingDirectory = {working_dir}\n\
         oLink.IconLocation = {icon}\n\
         oLink.Save\n"
    ))
}

/// VBScript string literal: embedded quotes are doubled, and line breaks are
/// rejected outright since a broken-out line would execute as script.
fn vbs_quote(value: &str) -> Result<String> {
    if value.chars().any(|c| c == '\r' || c == '\n') {
        return Err(SetupError::Exec {
            command: "wscript".to_string(),
            reason: format!("shortcut field {value:?} contains a line break"),
        });
    }
    Ok(format!("\"{}\"", value.replace('"', "\"\"")))
}
