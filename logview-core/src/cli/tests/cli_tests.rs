use crate::cli::{config_error_hint, viewer_config};
use crate::conf::{ConfigError, load_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn no_color_flag_turns_colors_off() {
    let config = viewer_config(None, true).unwrap();
    assert!(!config.display.show_colors);
}

#[test]
fn config_without_colors_stays_plain() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logview.hcl");
    fs::write(&path, "display {\n  show_colors = false\n}\n").unwrap();

    // Act
    let config = viewer_config(Some(&path), false).unwrap();

    // Assert
    assert!(!config.display.show_colors);
}

#[test]
fn invalid_level_gets_a_hint() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logview.hcl");
    fs::write(&path, "min_level = \"loud\"\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(config_error_hint(&err).unwrap().contains("warning"));
}
