// Stage 3: global CLI tool install.
// Runs on every execution, with no existence check: `npm install -g`
// is idempotent and re-running it picks up the latest published release.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::{log_step, log_success};

/// Installs the React Native command-line interface globally through npm.
pub fn install(runner: &dyn CommandRunner) -> Result<(), SetupError> {
    log_step!("[CLI] Installing the React Native CLI...");
    runner.run("npm", &["install", "-g", "react-native-cli"])?;
    log_success!("[CLI] React Native CLI installed");
    Ok(())
}
