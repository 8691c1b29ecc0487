//! Colors for the widgets.
//!
//! There is no global theme. A [`Palette`] is an immutable value that each
//! widget config copies in, so two renderers never share style state.

use ratatui::style::{Color, Modifier, Style};

pub mod ansi;

pub use ansi::{color_to_ansi, paint, style_to_ansi, RESET};

/// Default colors handed to widget configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Box borders
    pub border: Color,
    /// Box title; `None` keeps the border color
    pub title: Option<Color>,
    /// Filled part of a progress bar
    pub bar_fill: Color,
    /// Empty part of a progress bar
    pub bar_empty: Color,
    pub spark: Color,
    /// Table header row
    pub header: Style,
    /// Rule under the table header
    pub rule: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: None,
            bar_fill: Color::Green,
            bar_empty: Color::DarkGray,
            spark: Color::Cyan,
            header: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            rule: Color::DarkGray,
        }
    }
}
