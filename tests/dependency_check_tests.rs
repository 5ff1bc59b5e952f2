// Hard-stop behavior for environments the installer cannot remediate:
// Git absent anywhere, and Node.js absent on Windows.

mod common;

use common::{FakePrompter, FakeRunner};
use setup_mobiledev::error::SetupError;
use setup_mobiledev::installer::Installer;
use setup_mobiledev::platform::Platform;

#[test]
fn missing_git_stops_the_pipeline_before_any_other_stage() {
    let runner = FakeRunner::new(); // nothing installed on this host
    let commands = runner.commands();
    let probes = runner.probes();
    let mut installer = Installer::new(
        Platform::Linux,
        Box::new(runner),
        Box::new(FakePrompter::declining()),
    );

    let err = installer.run().unwrap_err();
    assert!(err.is_unsupported_environment());
    assert!(err.to_string().contains("Git"));

    // Only the Git probe ran; no runtime check, no install, no platform setup.
    assert_eq!(probes.borrow().as_slice(), ["git"]);
    assert!(commands.borrow().is_empty());
}

#[test]
fn missing_node_on_windows_stops_without_attempting_a_download() {
    let runner = FakeRunner::new().with_present("git");
    let commands = runner.commands();
    let probes = runner.probes();
    let mut installer = Installer::new(
        Platform::Windows,
        Box::new(runner),
        Box::new(FakePrompter::declining()),
    );

    let err = installer.run().unwrap_err();
    assert!(err.is_unsupported_environment());
    assert!(err.to_string().contains("nodejs.org"));

    // The runtime probe ran, but nothing was downloaded or installed.
    assert_eq!(probes.borrow().as_slice(), ["git", "node"]);
    assert!(commands.borrow().is_empty());
}

#[test]
fn missing_node_elsewhere_is_bootstrapped_not_fatal() {
    let runner = FakeRunner::new().with_present("git");
    let commands = runner.commands();
    let mut installer = Installer::new(
        Platform::Unsupported("freebsd".to_string()),
        Box::new(runner),
        Box::new(FakePrompter::declining()),
    );

    installer.run().expect("bootstrap path should succeed");

    let commands = commands.borrow();
    assert!(commands[0].contains("nvm-sh/nvm"), "first command should fetch nvm");
    assert!(commands[1].contains("nvm install --lts"));
}

#[test]
fn unsupported_errors_carry_their_guidance_verbatim() {
    let err = SetupError::Unsupported("some guidance".to_string());
    assert_eq!(err.to_string(), "some guidance");
    assert!(err.is_unsupported_environment());

    let err = SetupError::CommandFailed {
        command: "choco install -y microsoft-openjdk17".to_string(),
        status: 1,
    };
    assert!(!err.is_unsupported_environment());
}
