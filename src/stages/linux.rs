// Stage 4, Linux branch.
// Everything installable comes from apt: the JDK for the Android build
// chain and the device-bridge tools for talking to phones over USB.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::prompt::Prompter;
use crate::stages::ide;
use crate::{log_step, log_success};

/// Linux platform procedure.
///
/// 1. Refreshes the apt package index.
/// 2. Installs OpenJDK 17.
/// 3. Installs the adb and fastboot device-bridge utilities.
/// 4. Offers the Android Studio download page.
pub fn setup(runner: &dyn CommandRunner, prompter: &mut dyn Prompter) -> Result<(), SetupError> {
    log_step!("[Linux] Setting up the Linux toolchain...");

    log_step!("[Linux] Refreshing the apt package index...");
    runner.run("sudo", &["apt-get", "update"])?;

    log_step!("[Linux] Installing OpenJDK 17...");
    runner.run("sudo", &["apt-get", "install", "-y", "openjdk-17-jdk"])?;

    log_step!("[Linux] Installing the Android device-bridge tools...");
    runner.run(
        "sudo",
        &[
            "apt-get",
            "install",
            "-y",
            "android-tools-adb",
            "android-tools-fastboot",
        ],
    )?;
    log_success!("[Linux] Toolchain packages installed");

    ide::offer_download(runner, prompter, &Platform::Linux)
}
