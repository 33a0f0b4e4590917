use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

use crate::config;
use crate::error::Result;
use crate::launch;
use crate::paths;
use crate::pip::{self, PackageOutcome};
use crate::shortcuts::{self, ShortcutSpec};
use crate::stockfish::{self, EnsureOutcome};

pub fn run(base: &Path) -> Result<()> {
    run_with_deps(
        base,
        pip::ensure_package,
        stockfish::ensure_stockfish,
        shortcuts::create_desktop_shortcut,
        launch::spawn_detached,
    )
}

/// One pass over the whole setup. Each step runs regardless of how the
/// previous one fared; the only fatal error is a missing application script,
/// since nothing downstream makes sense without it.
pub fn run_with_deps(
    base: &Path,
    mut ensure_package_fn: impl FnMut(&str) -> Result<PackageOutcome>,
    mut ensure_engine_fn: impl FnMut(&Path, &str, &Path) -> Result<EnsureOutcome>,
    mut create_shortcut_fn: impl FnMut(&ShortcutSpec) -> Result<()>,
    mut launch_fn: impl FnMut(&mut Command) -> Result<()>,
) -> Result<()> {
    match ensure_package_fn(config::CHESS_PACKAGE) {
        Ok(PackageOutcome::AlreadyInstalled) => {
            info!("{} package already installed", config::CHESS_PACKAGE)
        }
        Ok(PackageOutcome::Installed) => info!("{} package installed", config::CHESS_PACKAGE),
        Err(err) => warn!("could not ensure {} package: {err}", config::CHESS_PACKAGE),
    }

    let script_path = paths::resolve_app_script(base)?;

    let engine_exe = paths::stockfish_exe(base);
    match ensure_engine_fn(&engine_exe, config::STOCKFISH_URL, &paths::stockfish_dir(base)) {
        Ok(EnsureOutcome::AlreadyPresent) => info!("stockfish already present"),
        Ok(EnsureOutcome::Installed) => {
            info!("stockfish installed to {}", paths::stockfish_dir(base).display())
        }
        Err(err) => warn!("could not ensure stockfish: {err}"),
    }

    let python = paths::find_python();
    match desktop_shortcut_spec(&python, &script_path) {
        Ok(spec) => match create_shortcut_fn(&spec) {
            Ok(()) => info!("shortcut created at {}", spec.link_path.display()),
            Err(err) => warn!("could not create shortcut: {err}"),
        },
        Err(err) => warn!("skipping shortcut: {err}"),
    }

    if !engine_exe.is_file() {
        warn!("stockfish is not installed; engine play will be unavailable");
    }

    let mut cmd = Command::new(&python);
    cmd.arg(&script_path);
    if let Some(dir) = script_path.parent() {
        cmd.current_dir(dir);
    }
    match launch_fn(&mut cmd) {
        Ok(()) => info!("launched {}", config::APP_NAME),
        Err(err) => warn!("could not launch {}: {err}", config::APP_NAME),
    }

    Ok(())
}

fn desktop_shortcut_spec(python: &Path, script_path: &Path) -> Result<ShortcutSpec> {
    let desktop = shortcuts::default_desktop_dir()?;
    let link_path = shortcuts::link_path(&desktop, config::APP_NAME)?;
    let script_dir = script_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok(ShortcutSpec {
        link_path,
        target: python.to_path_buf(),
        arguments: format!("\"{}\"", script_path.display()),
        working_dir: script_dir.clone(),
        icon: script_dir.join(config::ICON_FILE),
    })
}
