// Stage 4, Windows branch.
// Chocolatey carries the JDK install; its own bootstrap needs an
// elevated PowerShell with a relaxed execution policy for the session.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::prompt::Prompter;
use crate::stages::ide;
use crate::{log_step, log_success, log_warn};

/// The Chocolatey bootstrap script, executed through an elevated PowerShell.
const CHOCOLATEY_BOOTSTRAP: &str = "Set-ExecutionPolicy Bypass -Scope Process -Force; \
    [System.Net.ServicePointManager]::SecurityProtocol = [System.Net.ServicePointManager]::SecurityProtocol -bor 3072; \
    iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))";

/// Windows platform procedure.
///
/// 1. Ensures Chocolatey is present, bootstrapping it if absent.
/// 2. Installs the Microsoft OpenJDK 17 package.
/// 3. Offers the Android Studio download page.
pub fn setup(runner: &dyn CommandRunner, prompter: &mut dyn Prompter) -> Result<(), SetupError> {
    log_step!("[Windows] Setting up the Windows toolchain...");

    if !runner.probe("choco") {
        log_warn!("[Windows] Chocolatey not found. Installing it...");
        runner.run(
            "powershell",
            &[
                "-NoProfile",
                "-InputFormat",
                "None",
                "-ExecutionPolicy",
                "Bypass",
                "-Command",
                CHOCOLATEY_BOOTSTRAP,
            ],
        )?;
        log_success!("[Windows] Chocolatey installed");
    }

    log_step!("[Windows] Installing Microsoft OpenJDK 17...");
    runner.run("choco", &["install", "-y", "microsoft-openjdk17"])?;
    log_success!("[Windows] Toolchain packages installed");

    ide::offer_download(runner, prompter, &Platform::Windows)
}
