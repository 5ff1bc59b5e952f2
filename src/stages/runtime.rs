// Stage 2: JavaScript runtime check.
// If Node.js is already present the stage is a no-op. If it is absent,
// the installer bootstraps nvm and installs the latest LTS release.
// Windows has no scripted path; the user is told to install Node.js
// manually instead.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::{log_step, log_success, log_warn};

/// The nvm bootstrap line, executed through `bash -c`.
/// Downloads and runs the nvm install script, which drops `~/.nvm`.
const NVM_BOOTSTRAP: &str =
    "curl -o- https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.1/install.sh | bash";

/// Ensures a Node.js runtime is available.
///
/// # Behavior
/// * Node.js present: logs success and returns immediately. Neither
///   bootstrap sub-step runs.
/// * Node.js absent on Windows: returns `SetupError::Unsupported` with
///   manual-install guidance; nothing is downloaded.
/// * Node.js absent elsewhere: runs the nvm bootstrap script, then
///   sources `~/.nvm/nvm.sh` and installs the latest LTS release.
pub fn ensure(runner: &dyn CommandRunner, platform: &Platform) -> Result<(), SetupError> {
    log_step!("[Runtime] Checking for Node.js...");

    if runner.probe("node") {
        log_success!("[Runtime] Node.js is installed");
        return Ok(());
    }

    if matches!(platform, Platform::Windows) {
        return Err(SetupError::Unsupported(
            "Node.js is not installed. Download the Windows installer from https://nodejs.org and re-run the setup."
                .to_string(),
        ));
    }

    log_warn!("[Runtime] Node.js not found. Installing the latest LTS release via nvm...");
    runner.run("bash", &["-c", NVM_BOOTSTRAP])?;

    // The bootstrap script only edits shell profiles; this process still
    // has to source nvm.sh out of the home directory to use it.
    let home = dirs::home_dir().ok_or(SetupError::HomeDirUnavailable)?;
    let install_lts = format!(
        "source \"{}/.nvm/nvm.sh\" && nvm install --lts",
        home.display()
    );
    runner.run("bash", &["-c", &install_lts])?;

    log_success!("[Runtime] Node.js LTS installed");
    Ok(())
}
