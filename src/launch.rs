use std::process::Command;

use crate::error::{Result, SetupError};

/// Starts the command and drops the child handle. The process is never
/// waited on, so the app outlives this bootstrapper.
pub fn spawn_detached(cmd: &mut Command) -> Result<()> {
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    cmd.spawn().map_err(|source| SetupError::Exec {
        command: format_command(cmd),
        reason: source.to_string(),
    })?;
    Ok(())
}

pub fn format_command(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {args}")
    }
}
