//! Bordered box with an optional title set into the top border.

use ratatui::style::Color;
use tracing::debug;

use crate::text::{pad::spaces, trim_unterminated, truncate, visible_width};
use crate::theme::{color_to_ansi, Palette, RESET};

/// Narrowest box that still has room for both side borders.
pub const MIN_BOX_WIDTH: usize = 4;

/// Border glyphs for a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    /// Opens the title inside the top border, including its padding space
    pub title_left: &'static str,
    /// Closes the title inside the top border, including its padding space
    pub title_right: &'static str,
}

impl BoxStyle {
    pub const ROUNDED: BoxStyle = BoxStyle {
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
        horizontal: "─",
        vertical: "│",
        title_left: "─ ",
        title_right: " ─",
    };

    pub const SQUARE: BoxStyle = BoxStyle {
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
        horizontal: "─",
        vertical: "│",
        title_left: "─ ",
        title_right: " ─",
    };

    pub const DOUBLE: BoxStyle = BoxStyle {
        top_left: "╔",
        top_right: "╗",
        bottom_left: "╚",
        bottom_right: "╝",
        horizontal: "═",
        vertical: "║",
        title_left: "═ ",
        title_right: " ═",
    };

    pub const ASCII: BoxStyle = BoxStyle {
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
        horizontal: "-",
        vertical: "|",
        title_left: "- ",
        title_right: " -",
    };

    /// Look up a preset by name: `rounded`, `square`, `double` or `ascii`.
    pub fn by_name(name: &str) -> Option<BoxStyle> {
        match name.to_ascii_lowercase().as_str() {
            "rounded" => Some(Self::ROUNDED),
            "square" => Some(Self::SQUARE),
            "double" => Some(Self::DOUBLE),
            "ascii" => Some(Self::ASCII),
            _ => None,
        }
    }

    /// Columns the title brackets add around a title (4 for every preset).
    pub fn title_overhead(&self) -> usize {
        visible_width(self.title_left) + visible_width(self.title_right)
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::ROUNDED
    }
}

/// Everything about a box except its content.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxConfig {
    pub style: BoxStyle,
    pub title: Option<String>,
    /// Title color; `None` draws the title in the border color
    pub title_color: Option<Color>,
    pub border_color: Color,
    /// Total width including both borders
    pub width: usize,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self::from_palette(&Palette::default(), 40)
    }
}

impl BoxConfig {
    pub fn from_palette(palette: &Palette, width: usize) -> Self {
        Self {
            style: BoxStyle::default(),
            title: None,
            title_color: palette.title,
            border_color: palette.border,
            width,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A rendered-on-demand bordered box.
#[derive(Debug, Clone)]
pub struct BorderBox {
    config: BoxConfig,
    lines: Vec<String>,
}

impl BorderBox {
    /// Build a box. Widths under [`MIN_BOX_WIDTH`] are raised to it.
    pub fn new(mut config: BoxConfig, lines: Vec<String>) -> Self {
        config.width = config.width.max(MIN_BOX_WIDTH);
        Self { config, lines }
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Columns available to content lines.
    pub fn inner_width(&self) -> usize {
        self.config.width - 2
    }

    /// Whether the title is drawn into the top border.
    ///
    /// The title and its brackets may take the whole top border; a title
    /// one column wider is left out.
    pub fn title_fits(&self) -> bool {
        match &self.config.title {
            Some(title) if !title.is_empty() => {
                visible_width(title) + self.config.style.title_overhead() <= self.inner_width()
            }
            _ => false,
        }
    }

    /// Render top border, content lines and bottom border.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push(self.top_border());
        out.extend(self.lines.iter().map(|line| self.content_line(line)));
        out.push(self.bottom_border());
        out
    }

    /// Render the box as newline-separated lines, without a trailing newline.
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }

    fn top_border(&self) -> String {
        let style = &self.config.style;
        let border = color_to_ansi(self.config.border_color);
        let inner = self.inner_width();

        let mut line = String::new();
        line.push_str(&border);
        line.push_str(style.top_left);

        match self.config.title.as_deref() {
            Some(title) if self.title_fits() => {
                let title = trim_unterminated(title);
                let title_width = visible_width(title);
                line.push_str(style.title_left);
                if let Some(color) = self.config.title_color {
                    line.push_str(&color_to_ansi(color));
                }
                line.push_str(title);
                line.push_str(&border);
                line.push_str(style.title_right);
                let rest = inner - title_width - style.title_overhead();
                line.push_str(&style.horizontal.repeat(rest));
            }
            title => {
                if let Some(title) = title.filter(|t| !t.is_empty()) {
                    debug!(
                        title_width = visible_width(title),
                        inner, "box title does not fit, omitting"
                    );
                }
                line.push_str(&style.horizontal.repeat(inner));
            }
        }

        line.push_str(style.top_right);
        line.push_str(RESET);
        line
    }

    fn content_line(&self, content: &str) -> String {
        let style = &self.config.style;
        let border = color_to_ansi(self.config.border_color);
        let inner = self.inner_width();
        let content = trim_unterminated(content);

        let body = if visible_width(content) < inner {
            format!("{}{}", content, spaces(inner - visible_width(content)))
        } else {
            let cut = truncate(content, inner);
            let short = inner - visible_width(&cut);
            format!("{}{}", cut, spaces(short))
        };

        format!(
            "{b}{v}{r}{body}{b}{v}{r}",
            b = border,
            v = style.vertical,
            r = RESET,
            body = body
        )
    }

    fn bottom_border(&self) -> String {
        let style = &self.config.style;
        format!(
            "{}{}{}{}{}",
            color_to_ansi(self.config.border_color),
            style.bottom_left,
            style.horizontal.repeat(self.inner_width()),
            style.bottom_right,
            RESET
        )
    }
}
