//! Command runner - executes one expanded command through the host shell

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::params::ParameterStore;
use crate::template;

/// Exit information for a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

/// Spawns shell commands.
///
/// Implement this trait to intercept process execution (useful for testing).
pub trait Executor {
    /// Run `command` to completion, optionally in `workdir`.
    ///
    /// When `stream_output` is false the child's stdout and stderr are
    /// discarded.
    fn execute(
        &self,
        command: &str,
        workdir: Option<&Path>,
        stream_output: bool,
    ) -> io::Result<CommandStatus>;
}

/// Executor that hands commands to the host shell (`sh -c` / `cmd /C`).
pub struct SystemShell;

impl Executor for SystemShell {
    fn execute(
        &self,
        command: &str,
        workdir: Option<&Path>,
        stream_output: bool,
    ) -> io::Result<CommandStatus> {
        let mut cmd = shell_command(command);
        if let Some(dir) = workdir {
            cmd.current_dir(dir);
        }
        if stream_output {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = cmd.stdin(Stdio::inherit()).status()?;
        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(command);
    cmd
}

/// Substitute scalars into `command` and `workdir`, then run it.
///
/// In dry-run mode the command is only reported. A non-zero exit is an
/// error; nothing is retried.
pub fn run(
    ctx: &mut RunContext<'_>,
    command: &str,
    workdir: Option<&str>,
    params: &ParameterStore,
) -> Result<()> {
    let command = template::substitute(command, params);
    let workdir = workdir.map(|dir| template::substitute(dir, params));
    let dry_run = ctx.is_dry_run();

    ctx.reporter.on_command_start(&command, workdir.as_deref(), dry_run);
    if dry_run {
        return Ok(());
    }

    log::debug!(
        "spawning: {command}{}",
        workdir
            .as_deref()
            .map(|d| format!(" (in {d})"))
            .unwrap_or_default()
    );
    let status = ctx
        .executor
        .execute(&command, workdir.as_deref().map(Path::new), ctx.options.verbose)
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;
    ctx.reporter.on_command_complete(&command, status.success);

    if !status.success {
        return Err(Error::CommandFailed {
            command,
            code: status.code,
        });
    }
    Ok(())
}
