// Error types for the setup pipeline.
// Two classes matter to callers: environments the installer cannot fix
// (reported as warnings, no scripted remediation exists) and subprocess
// failures (reported as errors with the underlying message). Both abort
// the pipeline and exit with code 1; neither is retried.

use std::io;
use thiserror::Error;

/// The single error surface of the installer.
///
/// Every stage returns `Result<(), SetupError>`; the first error aborts
/// the remaining stages. `main` maps `Unsupported` to the warning path
/// and everything else to the generic error path.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The host is missing something the installer has no scripted
    /// remediation for (Git absent, Node.js absent on Windows).
    /// The message carries the manual-install guidance to print.
    #[error("{0}")]
    Unsupported(String),

    /// An external command ran but exited with a non-zero status.
    /// No attempt is made to classify why it failed.
    #[error("`{command}` exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    /// An external command could not be spawned at all.
    #[error("failed to launch `{command}`: {source}")]
    CommandLaunch { command: String, source: io::Error },

    /// The user home directory could not be resolved, so the nvm
    /// activation script cannot be located.
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    /// Reading a line of interactive input failed.
    #[error("failed to read interactive input: {0}")]
    Prompt(#[source] io::Error),
}

impl SetupError {
    /// Whether this error should be reported on the warning path
    /// (an environment gap) rather than the generic error path.
    pub fn is_unsupported_environment(&self) -> bool {
        matches!(self, SetupError::Unsupported(_))
    }
}
