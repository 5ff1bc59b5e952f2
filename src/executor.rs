// External command execution.
// Every mutation the installer performs on the host goes through the
// `CommandRunner` trait: real runs inherit the terminal so the user sees
// the package manager's own output, while existence probes run silenced.
// Tests substitute a recording fake for the whole trait, so no package
// manager is ever invoked from the test suite.

use std::process::{Command, Stdio};

// The 'colored' crate helps make the console output readable.
use colored::Colorize;

use crate::error::SetupError;
use crate::log_debug;

/// Capability interface over external command invocation.
///
/// The orchestration logic only ever talks to this trait, never to
/// `std::process` directly.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until the child exits.
    /// The child inherits the parent's standard streams.
    ///
    /// # Returns
    /// * `Ok(())` if the command exited successfully.
    /// * `Err(SetupError::CommandFailed)` on a non-zero exit status.
    /// * `Err(SetupError::CommandLaunch)` if the command could not be spawned.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), SetupError>;

    /// Existence probe: checks whether `<name> --version` succeeds, with
    /// all output suppressed.
    ///
    /// This is the sole detection mechanism the installer uses. Nothing
    /// is parsed out of the probe; any failure (spawn error, non-zero
    /// exit) simply reports the tool as absent.
    fn probe(&self, name: &str) -> bool;
}

/// Production `CommandRunner` backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), SetupError> {
        log_debug!(
            "[Executor] Running: {} {}",
            program.cyan().bold(),
            args.join(" ").cyan()
        );

        let status = Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| SetupError::CommandLaunch {
                command: command_line(program, args),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SetupError::CommandFailed {
                command: command_line(program, args),
                status: status.code().unwrap_or(-1),
            })
        }
    }

    fn probe(&self, name: &str) -> bool {
        let result = Command::new(name)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                log_debug!(
                    "[Executor] Probe '{} --version' exited with {}",
                    name.cyan(),
                    status
                );
                status.success()
            }
            Err(e) => {
                log_debug!("[Executor] Probe '{}' failed to spawn: {}", name.cyan(), e);
                false
            }
        }
    }
}

/// Renders a program and its arguments as one display line for error messages.
fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
