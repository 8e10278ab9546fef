//! Theme parsing tests

use notepad::theme::{Color, Theme};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!((color.r, color.g, color.b, color.a), (0x1E, 0x1E, 0x1E, 255));
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
}

#[test]
fn test_color_with_alpha() {
    let color = Color::rgb(1, 2, 3).with_alpha(100);
    assert_eq!(color.to_argb_u32(), 0x64010203);
}

#[test]
fn test_full_theme_yaml() {
    let yaml = r##"
editor:
  background: "#101010"
  foreground: "#EEEEEE"
  cursor_color: "#FF0000"
status_bar:
  background: "#202020"
  foreground: "#CCCCCC"
overlay:
  border: "#444444"
  background: "#303030"
  foreground: "#FFFFFF"
  input_background: "#000000"
"##;
    let theme = Theme::from_yaml(yaml).unwrap();
    assert_eq!(theme.editor.cursor_color, Color::rgb(0xFF, 0, 0));
    assert_eq!(theme.status_bar.background, Color::rgb(0x20, 0x20, 0x20));
    assert_eq!(theme.overlay.input_background, Color::rgb(0, 0, 0));
}

#[test]
fn test_empty_sections_use_defaults() {
    let theme = Theme::from_yaml("{}").unwrap();
    assert_eq!(theme, Theme::default());
}
