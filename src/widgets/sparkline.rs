//! Single-line sparkline over the most recent samples.

use ratatui::style::Color;

use crate::text::pad::spaces;
use crate::theme::{color_to_ansi, Palette, RESET};

/// Eight-level bar glyphs, lowest first.
pub const SPARKS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

#[derive(Debug, Clone, PartialEq)]
pub struct SparkConfig {
    /// Columns to fill; also the number of most recent samples shown
    pub width: usize,
    pub color: Color,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self::from_palette(&Palette::default(), 20)
    }
}

impl SparkConfig {
    pub fn from_palette(palette: &Palette, width: usize) -> Self {
        Self {
            width,
            color: palette.spark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sparkline {
    config: SparkConfig,
    samples: Vec<f64>,
}

impl Sparkline {
    pub fn new(config: SparkConfig, samples: Vec<f64>) -> Self {
        Self { config, samples }
    }

    /// The samples that will be drawn: the last `width` of them.
    pub fn window(&self) -> &[f64] {
        let start = self.samples.len().saturating_sub(self.config.width);
        &self.samples[start..]
    }

    /// Glyph index (0..=7) for every sample in the window.
    ///
    /// Samples are scaled between the window's min and max. A flat window
    /// has its range forced to 1, so every sample sits on level 0.
    pub fn levels(&self) -> Vec<usize> {
        let window = self.window();
        let (min, max) = window
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let top = (SPARKS.len() - 1) as f64;

        window
            .iter()
            .map(|&v| {
                let normalized = (v - min) / range;
                // `as` saturates and maps NaN to 0
                ((normalized * top).floor() as usize).min(SPARKS.len() - 1)
            })
            .collect()
    }

    /// Render exactly `width` columns, newest sample on the right.
    pub fn render(&self) -> String {
        let width = self.config.width;
        if width == 0 {
            return String::new();
        }
        if self.samples.is_empty() {
            return spaces(width);
        }

        let levels = self.levels();
        let mut out = String::with_capacity(width * 3 + 16);
        out.push_str(&spaces(width - levels.len()));
        out.push_str(&color_to_ansi(self.config.color));
        for level in levels {
            out.push_str(SPARKS[level]);
        }
        out.push_str(RESET);
        out
    }
}
