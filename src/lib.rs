// Library surface of setup-mobiledev.
// The binary in main.rs is a thin wrapper over these modules; exposing
// them as a library lets the integration tests drive the full pipeline
// with fake command runners and prompters.

pub mod error;
pub mod executor;
pub mod installer;
pub mod logger;
pub mod platform;
pub mod prompt;
pub mod stages;
