//! Subprocess execution with inherited stdio

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;

fn shell_command(command: &str) -> TokioCommand {
    if cfg!(windows) {
        let mut cmd = TokioCommand::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = TokioCommand::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

fn check_status(status: ExitStatus, what: &str) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!(
            "`{}` failed with exit code: {}",
            what,
            status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string())
        )
    }
}

/// Run a shell command string in `cwd` and wait for it to finish.
///
/// Output goes straight to the terminal. There is no timeout: package
/// installs can take as long as they take.
pub async fn run(command: &str, cwd: &Path) -> Result<()> {
    let status = shell_command(command)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to spawn `{}`", command))?;

    check_status(status, command)
}

/// Run a program with explicit arguments, bypassing the shell
pub async fn run_program(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let display = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let status = TokioCommand::new(program)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to spawn `{}`", display))?;

    check_status(status, &display)
}
