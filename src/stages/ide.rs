// Shared IDE step: every platform procedure ends by offering to open
// the Android Studio download page in the host browser. Installing the
// IDE itself is a manual step; the installer never verifies it happened.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::prompt::{Prompter, is_affirmative};
use crate::{log_step, log_warn};

pub const ANDROID_STUDIO_URL: &str = "https://developer.android.com/studio";

/// Asks whether to open the Android Studio download page and, on the
/// affirmative token, launches the platform browser opener.
///
/// Any other response (including empty input) skips the launch without
/// error and prints the URL for later.
pub fn offer_download(
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
    platform: &Platform,
) -> Result<(), SetupError> {
    let response =
        prompter.ask("Open the Android Studio download page in your browser? (y/n)")?;

    if !is_affirmative(&response) {
        log_warn!(
            "[IDE] Skipping Android Studio. Download it later from {}",
            ANDROID_STUDIO_URL.cyan()
        );
        return Ok(());
    }

    log_step!("[IDE] Opening the Android Studio download page...");
    match browser_command(platform) {
        Some((program, args)) => runner.run(program, &args)?,
        None => {
            log_warn!(
                "[IDE] No browser opener known for this platform. Visit {}",
                ANDROID_STUDIO_URL.cyan()
            );
            return Ok(());
        }
    }

    log_warn!("[IDE] Complete the Android Studio installation manually before building apps.");
    Ok(())
}

/// The platform's URL-opening command, if one is known.
fn browser_command(platform: &Platform) -> Option<(&'static str, Vec<&'static str>)> {
    match platform {
        Platform::MacOs => Some(("open", vec![ANDROID_STUDIO_URL])),
        Platform::Linux => Some(("xdg-open", vec![ANDROID_STUDIO_URL])),
        Platform::Windows => Some(("cmd", vec!["/C", "start", "", ANDROID_STUDIO_URL])),
        Platform::Unsupported(_) => None,
    }
}
