// Host platform detection.
// The platform tag is read once at startup from `std::env::consts::OS`
// and stays immutable for the rest of the run; every platform-conditional
// branch in the pipeline dispatches on this value.

use std::fmt;

/// The host operating system, as a closed set of variants.
///
/// Anything other than the three supported systems is carried as
/// `Unsupported` with the raw tag, so the pipeline can name it in a
/// warning instead of silently skipping platform setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Unsupported(String),
}

impl Platform {
    /// Detects the current operating system.
    ///
    /// `std::env::consts::OS` provides the target operating system Rust
    /// was compiled for (e.g., "macos", "linux", "windows"), which is
    /// reliable for the running binary.
    pub fn detect() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Normalizes an OS spelling into a `Platform` variant.
    ///
    /// Handles the common alternative names for each system ("darwin"
    /// for macOS, "win32"/"win64" for Windows) so the tag matches no
    /// matter where the string came from.
    ///
    /// # Arguments
    /// * `os`: An input string representing an OS (e.g., "macOS", "darwin", "Linux").
    pub fn from_os_str(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" | "apple-darwin" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" | "win32" | "win64" => Platform::Windows,
            other => Platform::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macOS"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
            Platform::Unsupported(tag) => write!(f, "{tag}"),
        }
    }
}
