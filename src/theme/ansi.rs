//! ANSI escape codes and conversion from ratatui colors.

use ratatui::style::{Color, Modifier, Style};

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold / increased intensity.
pub const BOLD: &str = "\x1b[1m";
/// Dim / decreased intensity.
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";

/// Gray color (ANSI 37)
pub const GRAY: &str = "\x1b[37m";
/// Dark gray (ANSI 90) - default border color
pub const DARK_GRAY: &str = "\x1b[90m";
/// Green color (ANSI 32) - default bar fill
pub const GREEN: &str = "\x1b[32m";
/// Cyan color (ANSI 36) - default sparkline color
pub const CYAN: &str = "\x1b[36m";
/// Red color (ANSI 31)
pub const RED: &str = "\x1b[31m";

/// Convert a ratatui Color to a foreground escape code.
///
/// Named colors map to the 16-color palette, `Indexed` to the 256-color
/// form and `Rgb` to truecolor. `Color::Reset` yields [`RESET`].
pub fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Reset => return RESET.to_string(),
        Color::Black => "30",
        Color::Red => "31",
        Color::Green => "32",
        Color::Yellow => "33",
        Color::Blue => "34",
        Color::Magenta => "35",
        Color::Cyan => "36",
        Color::Gray => "37",
        Color::DarkGray => "90",
        Color::LightRed => "91",
        Color::LightGreen => "92",
        Color::LightYellow => "93",
        Color::LightBlue => "94",
        Color::LightMagenta => "95",
        Color::LightCyan => "96",
        Color::White => "97",
        Color::Indexed(n) => return format!("\x1b[38;5;{}m", n),
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
    };
    format!("\x1b[{}m", code)
}

/// Convert a ratatui Style to escape codes: modifiers first, then color.
///
/// Only the foreground and the bold / dim / italic / underline modifiers are
/// rendered; an empty style yields the empty string.
pub fn style_to_ansi(style: Style) -> String {
    let mut out = String::new();
    let mods = style.add_modifier;
    if mods.contains(Modifier::BOLD) {
        out.push_str(BOLD);
    }
    if mods.contains(Modifier::DIM) {
        out.push_str(DIM);
    }
    if mods.contains(Modifier::ITALIC) {
        out.push_str(ITALIC);
    }
    if mods.contains(Modifier::UNDERLINED) {
        out.push_str(UNDERLINE);
    }
    if let Some(fg) = style.fg {
        out.push_str(&color_to_ansi(fg));
    }
    out
}

/// Wrap `text` in `style`, closing with a reset.
pub fn paint(style: Style, text: &str) -> String {
    let open = style_to_ansi(style);
    if open.is_empty() {
        return text.to_string();
    }
    format!("{}{}{}", open, text, RESET)
}
