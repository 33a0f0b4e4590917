use std::io;
use std::process::{Command, ExitStatus, Stdio};
use tracing::info;

use crate::error::{Result, SetupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOutcome {
    AlreadyInstalled,
    Installed,
}

pub fn ensure_package(name: &str) -> Result<PackageOutcome> {
    ensure_package_with_runner(name, |cmd| cmd.status())
}

/// Probes with `pip show` and installs with `pip install --user` when the
/// probe comes back negative. Any probe failure, including a missing pip,
/// falls through to the install attempt; only the install itself can error.
pub fn ensure_package_with_runner(
    name: &str,
    mut run: impl FnMut(&mut Command) -> io::Result<ExitStatus>,
) -> Result<PackageOutcome> {
    let mut show = Command::new("pip");
    show.arg("show")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if matches!(run(&mut show), Ok(status) if status.success()) {
        return Ok(PackageOutcome::AlreadyInstalled);
    }

    info!("{name} package not installed, installing");
    let mut install = Command::new("pip");
    install.arg("install").arg("--user").arg(name);
    let status = run(&mut install).map_err(|source| SetupError::Exec {
        command: format!("pip install --user {name}"),
        reason: source.to_string(),
    })?;
    if !status.success() {
        return Err(SetupError::Exec {
            command: format!("pip install --user {name}"),
            reason: format!("exit {:?}", status.code()),
        });
    }

    Ok(PackageOutcome::Installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit(code: i32) -> ExitStatus {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            ExitStatus::from_raw(code << 8)
        }
        #[cfg(windows)]
        {
            use std::os::windows::process::ExitStatusExt;
            ExitStatus::from_raw(code as u32)
        }
    }

    fn argv(cmd: &Command) -> Vec<String> {
        let mut out = vec![cmd.get_program().to_string_lossy().to_string()];
        out.extend(cmd.get_args().map(|a| a.to_string_lossy().to_string()));
        out
    }

    #[test]
    fn installed_package_skips_the_install() {
        let mut seen = Vec::new();
        let outcome = ensure_package_with_runner("chess", |cmd| {
            seen.push(argv(cmd));
            Ok(exit(0))
        })
        .unwrap();

        assert_eq!(outcome, PackageOutcome::AlreadyInstalled);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ["pip", "show", "chess"].map(String::from));
    }

    #[test]
    fn missing_package_triggers_a_user_install() {
        let mut seen = Vec::new();
        let outcome = ensure_package_with_runner("chess", |cmd| {
            seen.push(argv(cmd));
            if seen.len() == 1 {
                Ok(exit(1))
            } else {
                Ok(exit(0))
            }
        })
        .unwrap();

        assert_eq!(outcome, PackageOutcome::Installed);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], ["pip", "install", "--user", "chess"].map(String::from));
    }

    #[test]
    fn failed_install_is_an_exec_error() {
        let err = ensure_package_with_runner("chess", |_cmd| Ok(exit(1))).unwrap_err();
        assert!(matches!(err, SetupError::Exec { .. }));
        assert!(err.to_string().contains("pip install --user chess"));
    }

    #[test]
    fn probe_spawn_failure_still_attempts_the_install() {
        let mut seen = Vec::new();
        let outcome = ensure_package_with_runner("chess", |cmd| {
            seen.push(argv(cmd));
            if seen.len() == 1 {
                Err(io::Error::new(io::ErrorKind::NotFound, "pip not found"))
            } else {
                Ok(exit(0))
            }
        })
        .unwrap();

        assert_eq!(outcome, PackageOutcome::Installed);
        assert_eq!(seen.len(), 2);
    }
}
