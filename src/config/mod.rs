//! Configuration management for dashkit
//!
//! Widget defaults live in `~/.config/dashkit/config.toml`. Every field has
//! a default, so a missing file or a partial file is fine. Colors and style
//! presets are kept as strings in the file and resolved into a [`Palette`]
//! and glyph sets on demand.

mod error;
mod io;
mod types;

pub use error::ConfigError;
pub use types::*;

use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use std::path::{Path, PathBuf};

use crate::theme::Palette;
use crate::widgets::{BarStyle, BoxStyle};

impl Config {
    /// Get the config file path (~/.config/dashkit/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Resolve every configured color into a palette.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut header = Style::default().fg(parse_color(
            "table.header_color",
            &self.table.header_color,
        )?);
        if self.table.header_bold {
            header = header.add_modifier(Modifier::BOLD);
        }

        Ok(Palette {
            border: parse_color("box.border_color", &self.border_box.border_color)?,
            title: parse_optional_color("box.title_color", &self.border_box.title_color)?,
            bar_fill: parse_color("bar.fill_color", &self.bar.fill_color)?,
            bar_empty: parse_color("bar.empty_color", &self.bar.empty_color)?,
            spark: parse_color("spark.color", &self.spark.color)?,
            header,
            rule: parse_color("table.rule_color", &self.table.rule_color)?,
        })
    }

    /// The configured box glyph preset.
    pub fn box_style(&self) -> Result<BoxStyle, ConfigError> {
        BoxStyle::by_name(&self.border_box.style).ok_or_else(|| ConfigError::UnknownStyle {
            kind: "box",
            name: self.border_box.style.clone(),
            expected: "rounded, square, double, ascii",
        })
    }

    /// The configured bar glyph preset.
    pub fn bar_style(&self) -> Result<BarStyle, ConfigError> {
        BarStyle::by_name(&self.bar.style).ok_or_else(|| ConfigError::UnknownStyle {
            kind: "bar",
            name: self.bar.style.clone(),
            expected: "block, bracket, ascii",
        })
    }
}

/// Parse a color name, 256-color index or `#rrggbb` value.
pub fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| ConfigError::InvalidColor {
            field,
            value: value.to_string(),
        })
}

fn parse_optional_color(field: &'static str, value: &str) -> Result<Option<Color>, ConfigError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_color(field, value).map(Some)
}
