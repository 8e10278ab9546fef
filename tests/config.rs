//! Config file loading tests

use std::fs;

use notepad::config::EditorConfig;
use notepad::theme::Color;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "font_size: 16\nwindow_width: 1024\ntheme:\n  editor:\n    background: \"#000000\"\n",
    )
    .unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(config.font_size, 16.0);
    assert_eq!(config.window_width, 1024);
    assert_eq!(config.window_height, 900);
    assert_eq!(config.theme.editor.background, Color::rgb(0, 0, 0));
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorConfig::load_from(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.contains("Failed to read config"));
}

#[test]
fn test_bad_color_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "theme:\n  editor:\n    foreground: \"#zzzzzz\"\n").unwrap();

    assert!(EditorConfig::load_from(&path).is_err());
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();

    let config = EditorConfig::load_from(&path).unwrap();
    assert_eq!(config.tab_width, 4);
    assert!(config.font_path.is_none());
}

#[test]
fn test_tab_width_is_clamped() {
    let config = EditorConfig::from_yaml("tab_width: 99").unwrap();
    assert_eq!(config.tab_width, 16);
}
