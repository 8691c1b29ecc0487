//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default, rename = "box")]
    pub border_box: BoxSection,
    #[serde(default)]
    pub bar: BarSection,
    #[serde(default)]
    pub spark: SparkSection,
    #[serde(default)]
    pub table: TableSection,
}

/// When to emit color codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color on a terminal unless `NO_COLOR` is set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide whether to emit color given the environment.
    pub fn enabled(self, no_color_env: bool, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color_env && is_terminal,
        }
    }
}

/// Output settings shared by every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default render width; 0 detects the terminal width
    #[serde(default)]
    pub width: usize,
    #[serde(default)]
    pub color: ColorMode,
}

/// Width used when neither the config nor the terminal supply one
pub const FALLBACK_WIDTH: usize = 80;

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 0,
            color: ColorMode::Auto,
        }
    }
}

/// `[box]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSection {
    #[serde(default = "default_box_style")]
    pub style: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    /// Empty keeps the border color
    #[serde(default)]
    pub title_color: String,
}

fn default_box_style() -> String {
    "rounded".to_string()
}

fn default_border_color() -> String {
    "darkgray".to_string()
}

impl Default for BoxSection {
    fn default() -> Self {
        Self {
            style: default_box_style(),
            border_color: default_border_color(),
            title_color: String::new(),
        }
    }
}

/// `[bar]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSection {
    #[serde(default = "default_bar_style")]
    pub style: String,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
    #[serde(default = "default_border_color")]
    pub empty_color: String,
    #[serde(default = "default_show_value")]
    pub show_value: bool,
}

fn default_bar_style() -> String {
    "bracket".to_string()
}

fn default_fill_color() -> String {
    "green".to_string()
}

fn default_show_value() -> bool {
    true
}

impl Default for BarSection {
    fn default() -> Self {
        Self {
            style: default_bar_style(),
            fill_color: default_fill_color(),
            empty_color: default_border_color(),
            show_value: default_show_value(),
        }
    }
}

/// `[spark]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkSection {
    #[serde(default = "default_spark_color")]
    pub color: String,
}

fn default_spark_color() -> String {
    "cyan".to_string()
}

impl Default for SparkSection {
    fn default() -> Self {
        Self {
            color: default_spark_color(),
        }
    }
}

/// `[table]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSection {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_header_color")]
    pub header_color: String,
    #[serde(default = "default_header_bold")]
    pub header_bold: bool,
    #[serde(default = "default_border_color")]
    pub rule_color: String,
}

fn default_separator() -> String {
    "  ".to_string()
}

fn default_header_color() -> String {
    "white".to_string()
}

fn default_header_bold() -> bool {
    true
}

impl Default for TableSection {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            header_color: default_header_color(),
            header_bold: default_header_bold(),
            rule_color: default_border_color(),
        }
    }
}
