// Stage 4, macOS branch.
// Homebrew carries the installable pieces (Watchman for the Metro file
// watcher, a Zulu OpenJDK cask for the Android toolchain). Xcode cannot
// be scripted from here, so its absence is only warned about.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::prompt::Prompter;
use crate::stages::ide;
use crate::{log_step, log_success, log_warn};

/// The Homebrew bootstrap line, executed through `bash -c`.
const HOMEBREW_BOOTSTRAP: &str =
    r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#;

/// macOS platform procedure.
///
/// 1. Ensures Homebrew is present, bootstrapping it if absent.
/// 2. Installs Watchman.
/// 3. Checks for Xcode and warns (only) if it is missing.
/// 4. Installs the Zulu OpenJDK 17 cask.
/// 5. Offers the Android Studio download page.
pub fn setup(runner: &dyn CommandRunner, prompter: &mut dyn Prompter) -> Result<(), SetupError> {
    log_step!("[macOS] Setting up the macOS toolchain...");

    if !runner.probe("brew") {
        log_warn!("[macOS] Homebrew not found. Installing it...");
        runner.run("bash", &["-c", HOMEBREW_BOOTSTRAP])?;
        log_success!("[macOS] Homebrew installed");
    }

    log_step!("[macOS] Installing Watchman...");
    runner.run("brew", &["install", "watchman"])?;

    log_step!("[macOS] Checking for Xcode...");
    if runner.probe("xcodebuild") {
        log_success!("[macOS] Xcode is installed");
    } else {
        log_warn!(
            "[macOS] Xcode not detected. Install it from the {} for iOS development.",
            "Mac App Store".bold()
        );
    }

    log_step!("[macOS] Installing the Zulu OpenJDK 17 distribution...");
    runner.run("brew", &["install", "--cask", "zulu17"])?;

    ide::offer_download(runner, prompter, &Platform::MacOs)
}
