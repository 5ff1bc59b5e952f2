// Platform tag normalization: the three recognized systems under their
// common spellings, and everything else carried as an explicit
// Unsupported tag.

use setup_mobiledev::platform::Platform;

#[test]
fn recognized_tags_map_to_their_variants() {
    assert_eq!(Platform::from_os_str("macos"), Platform::MacOs);
    assert_eq!(Platform::from_os_str("darwin"), Platform::MacOs);
    assert_eq!(Platform::from_os_str("apple-darwin"), Platform::MacOs);
    assert_eq!(Platform::from_os_str("linux"), Platform::Linux);
    assert_eq!(Platform::from_os_str("windows"), Platform::Windows);
    assert_eq!(Platform::from_os_str("win32"), Platform::Windows);
    assert_eq!(Platform::from_os_str("win64"), Platform::Windows);
}

#[test]
fn normalization_is_case_insensitive() {
    assert_eq!(Platform::from_os_str("MacOS"), Platform::MacOs);
    assert_eq!(Platform::from_os_str("Darwin"), Platform::MacOs);
    assert_eq!(Platform::from_os_str("LINUX"), Platform::Linux);
    assert_eq!(Platform::from_os_str("Windows"), Platform::Windows);
}

#[test]
fn unrecognized_tags_are_carried_not_dropped() {
    assert_eq!(
        Platform::from_os_str("freebsd"),
        Platform::Unsupported("freebsd".to_string())
    );
    assert_eq!(
        Platform::from_os_str("solaris"),
        Platform::Unsupported("solaris".to_string())
    );
}

#[test]
fn detect_returns_a_recognized_variant_on_supported_hosts() {
    // The test suite itself only builds on the three supported systems.
    assert!(!matches!(Platform::detect(), Platform::Unsupported(_)));
}

#[test]
fn display_names_are_human_readable() {
    assert_eq!(Platform::MacOs.to_string(), "macOS");
    assert_eq!(Platform::Linux.to_string(), "Linux");
    assert_eq!(Platform::Windows.to_string(), "Windows");
    assert_eq!(
        Platform::Unsupported("freebsd".to_string()).to_string(),
        "freebsd"
    );
}
