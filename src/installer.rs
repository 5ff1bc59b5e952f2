// This file contains the primary logic of the setup pipeline.
// It orchestrates the prerequisite and runtime checks, the global CLI
// install, the platform-conditional branch, and the closing next-steps
// output.

use colored::Colorize;

use crate::error::SetupError;
use crate::executor::CommandRunner;
use crate::platform::Platform;
use crate::prompt::Prompter;
use crate::stages;
use crate::{log_success, log_warn};

/// Runs the fixed installation pipeline and reports success or the
/// first failure.
///
/// The platform tag is captured at construction and immutable for the
/// run; the command runner and prompt handle are injected so the whole
/// pipeline can be driven without touching the real host.
pub struct Installer {
    platform: Platform,
    runner: Box<dyn CommandRunner>,
    prompter: Box<dyn Prompter>,
}

impl Installer {
    pub fn new(
        platform: Platform,
        runner: Box<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Installer {
            platform,
            runner,
            prompter,
        }
    }

    /// Executes the pipeline stages in order.
    ///
    /// 1. Prerequisite check (Git).
    /// 2. Runtime check (Node.js, with nvm bootstrap where scripted).
    /// 3. Global React Native CLI install.
    /// 4. Exactly one platform procedure, chosen by the platform tag.
    /// 5. Completion banner and static next-steps list.
    ///
    /// The first stage error aborts everything after it. There is no
    /// retry and no rollback of already-applied changes.
    pub fn run(&mut self) -> Result<(), SetupError> {
        eprintln!(
            "{}",
            "React Native Environment Setup".bright_yellow().bold()
        );
        eprintln!("{}", "=".repeat(30).bright_yellow());

        stages::prerequisites::check(self.runner.as_ref())?;
        stages::runtime::ensure(self.runner.as_ref(), &self.platform)?;
        stages::cli_tool::install(self.runner.as_ref())?;
        self.setup_for_platform()?;
        self.print_next_steps();
        Ok(())
    }

    /// Dispatches to the platform procedure for the captured tag.
    ///
    /// An unrecognized tag performs no platform setup; it is reported
    /// as a warning and the pipeline continues to the success output.
    fn setup_for_platform(&mut self) -> Result<(), SetupError> {
        match &self.platform {
            Platform::MacOs => stages::macos::setup(self.runner.as_ref(), self.prompter.as_mut()),
            Platform::Linux => stages::linux::setup(self.runner.as_ref(), self.prompter.as_mut()),
            Platform::Windows => {
                stages::windows::setup(self.runner.as_ref(), self.prompter.as_mut())
            }
            Platform::Unsupported(tag) => {
                log_warn!(
                    "[Setup] Unrecognized platform '{}'. Skipping platform-specific setup.",
                    tag.red()
                );
                Ok(())
            }
        }
    }

    /// Prints the completion banner and the manual follow-up steps.
    ///
    /// The banner means every scripted stage ran without raising; the
    /// listed steps are manual and are never verified by this tool.
    fn print_next_steps(&self) {
        log_success!("[Setup] Environment setup complete!");

        println!();
        println!("{}:", "Next steps".bright_yellow().bold());
        println!("{}", "=".repeat(20).bright_yellow());
        println!("  1. Install Android Studio along with the Android SDK and platform tools.");
        println!("  2. Set ANDROID_HOME and add the platform-tools directory to your PATH.");
        println!("  3. Create an Android Virtual Device, or enable USB debugging on a phone.");
        println!("  4. Scaffold a project with `npx react-native init MyApp`.");
        println!("  5. Run `npx react-native doctor` to confirm the environment.");
    }
}
