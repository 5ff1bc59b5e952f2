// Stage 1: prerequisite check.
// Git is the one tool the installer refuses to bootstrap: without it,
// nothing else in a React Native workflow functions, so the pipeline
// stops before touching the host.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::{log_step, log_success};

/// Requires Git to be present on the host.
///
/// # Returns
/// * `Ok(())` if the `git --version` probe succeeds.
/// * `Err(SetupError::Unsupported)` with manual-install guidance if Git
///   is absent. No later stage runs in that case.
pub fn check(runner: &dyn CommandRunner) -> Result<(), SetupError> {
    log_step!("[Prerequisites] Checking for Git...");

    if !runner.probe("git") {
        return Err(SetupError::Unsupported(
            "Git is not installed. Install it from https://git-scm.com and re-run the setup."
                .to_string(),
        ));
    }

    log_success!("[Prerequisites] Git is installed");
    Ok(())
}
