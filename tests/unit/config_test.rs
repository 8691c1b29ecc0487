//! Unit tests for config loading and palette resolution

use ratatui::style::Color;
use std::fs;
use tempfile::TempDir;

use dashkit::widgets::{BarStyle, BoxStyle};
use dashkit::{ColorMode, Config, Palette};

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r##"
[display]
width = 100
color = "never"

[bar]
style = "ascii"
fill_color = "#00ff00"

[spark]
color = "214"
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.width, 100);
    assert_eq!(config.display.color, ColorMode::Never);
    assert_eq!(config.bar_style().unwrap(), BarStyle::ASCII);
    assert_eq!(config.box_style().unwrap(), BoxStyle::ROUNDED);

    let palette = config.palette().unwrap();
    assert_eq!(palette.bar_fill, Color::Rgb(0, 255, 0));
    assert_eq!(palette.spark, Color::Indexed(214));
    assert_eq!(palette.border, Palette::default().border);
}

#[test]
fn invalid_color_fails_to_load_with_field_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[box]\nborder_color = \"glitter\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("box.border_color"), "{}", message);
    assert!(message.contains("glitter"), "{}", message);
}

#[test]
fn malformed_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display\nwidth = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn save_then_load_preserves_changes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sub").join("config.toml");

    let mut config = Config::default();
    config.border_box.style = "double".to_string();
    config.table.separator = " | ".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.box_style().unwrap(), BoxStyle::DOUBLE);
}

#[test]
fn saved_file_uses_box_section_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    Config::default().save_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[box]"));
    assert!(!contents.contains("border_box"));
}
