//! Progress bar with 1/8-cell fill resolution.

use ratatui::style::Color;

use crate::text::{trim_unterminated, visible_width};
use crate::theme::{color_to_ansi, Palette, RESET};

/// Sub-cell steps per character.
pub const SUB_LEVELS: usize = 8;

/// Partial-fill glyphs, indexed by eighths filled. Index 0 draws nothing.
pub const SUB_BLOCKS: [&str; SUB_LEVELS] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Fill and bracket glyphs for a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub full: &'static str,
    pub empty: &'static str,
    /// Left bracket; empty for none
    pub left: &'static str,
    /// Right bracket; empty for none
    pub right: &'static str,
}

impl BarStyle {
    pub const BLOCK: BarStyle = BarStyle {
        full: "█",
        empty: "░",
        left: "",
        right: "",
    };

    pub const BRACKET: BarStyle = BarStyle {
        full: "█",
        empty: "░",
        left: "[",
        right: "]",
    };

    pub const ASCII: BarStyle = BarStyle {
        full: "#",
        empty: "-",
        left: "[",
        right: "]",
    };

    /// Look up a preset by name: `block`, `bracket` or `ascii`.
    pub fn by_name(name: &str) -> Option<BarStyle> {
        match name.to_ascii_lowercase().as_str() {
            "block" => Some(Self::BLOCK),
            "bracket" => Some(Self::BRACKET),
            "ascii" => Some(Self::ASCII),
            _ => None,
        }
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::BRACKET
    }
}

/// Bar appearance, independent of the value shown.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub style: BarStyle,
    /// Width of the bar including brackets
    pub width: usize,
    /// Text before the bar, followed by one space; empty for none
    pub label: String,
    /// Append the percentage after the bar
    pub show_value: bool,
    pub fill_color: Color,
    pub empty_color: Color,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self::from_palette(&Palette::default(), 20)
    }
}

impl BarConfig {
    pub fn from_palette(palette: &Palette, width: usize) -> Self {
        Self {
            style: BarStyle::default(),
            width,
            label: String::new(),
            show_value: true,
            fill_color: palette.bar_fill,
            empty_color: palette.bar_empty,
        }
    }
}

/// How a bar's cells divide between full, partial and empty glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub full: usize,
    /// Eighths shown by the single partial glyph; 0 means none
    pub partial: usize,
    pub empty: usize,
}

impl Fill {
    /// Quantize `percent` (0..=100) over `cells` characters in eighths.
    pub fn quantize(cells: usize, percent: f64) -> Fill {
        let total = cells * SUB_LEVELS;
        let filled = ((total as f64 * percent / 100.0).floor() as usize).min(total);
        let full = filled / SUB_LEVELS;
        let partial = filled % SUB_LEVELS;
        let empty = cells - full - usize::from(partial > 0);
        Fill {
            full,
            partial,
            empty,
        }
    }
}

/// A horizontal progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    config: BarConfig,
    percent: f64,
}

impl ProgressBar {
    /// Build a bar. `percent` is clamped to 0..=100; NaN counts as 0.
    pub fn new(config: BarConfig, percent: f64) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        Self { config, percent }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Cells between the brackets, never less than one.
    pub fn bar_width(&self) -> usize {
        let style = &self.config.style;
        let brackets = visible_width(style.left) + visible_width(style.right);
        self.config.width.saturating_sub(brackets).max(1)
    }

    pub fn fill(&self) -> Fill {
        Fill::quantize(self.bar_width(), self.percent)
    }

    /// Render label, bar and value suffix.
    pub fn render(&self) -> String {
        let style = &self.config.style;
        let fill = self.fill();
        let mut out = String::with_capacity(self.config.label.len() + self.config.width * 4 + 24);

        if !self.config.label.is_empty() {
            out.push_str(trim_unterminated(&self.config.label));
            out.push(' ');
        }

        out.push_str(style.left);
        out.push_str(&color_to_ansi(self.config.fill_color));
        out.push_str(&style.full.repeat(fill.full));
        out.push_str(SUB_BLOCKS[fill.partial]);
        out.push_str(RESET);
        if fill.empty > 0 {
            out.push_str(&color_to_ansi(self.config.empty_color));
            out.push_str(&style.empty.repeat(fill.empty));
            out.push_str(RESET);
        }
        out.push_str(style.right);

        if self.config.show_value {
            out.push(' ');
            out.push_str(&format_percent(self.percent));
        }
        out
    }
}

/// Whole percent right-aligned in three columns, e.g. `  7%`, ` 42%`, `100%`.
pub fn format_percent(percent: f64) -> String {
    let whole = if percent.is_nan() {
        0
    } else {
        percent.clamp(0.0, 100.0) as u32
    };
    format!("{:>3}%", whole)
}
