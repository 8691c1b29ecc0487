//! Escape-aware padding to an exact column count.

use super::scanner::trim_unterminated;
use super::truncate::truncate;
use super::width::visible_width;
use crate::layout::Align;

/// Fit `s` into exactly `width` columns.
///
/// Shorter text is padded with spaces according to `align` (centering puts
/// the odd column on the right). Text that is as wide as or wider than
/// `width` goes through [`truncate`], and any column a wide character could
/// not fill is topped up with a trailing space. A control sequence left open
/// at the end of `s` is dropped.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    if width == 0 {
        return String::new();
    }

    let s = trim_unterminated(s);
    let len = visible_width(s);
    if len >= width {
        let mut cut = truncate(s, width);
        let short = width - visible_width(&cut);
        cut.push_str(&spaces(short));
        return cut;
    }

    let padding = width - len;
    match align {
        Align::Left => format!("{}{}", s, spaces(padding)),
        Align::Right => format!("{}{}", spaces(padding), s),
        Align::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{}{}", spaces(left), s, spaces(right))
        }
    }
}

/// Append spaces until `s` is `width` columns; never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    let s = trim_unterminated(s);
    let len = visible_width(s);
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, spaces(width - len))
}

/// Prepend spaces until `s` is `width` columns; never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    let len = visible_width(s);
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", spaces(width - len), s)
}

/// A horizontal rule of `width` box-drawing dashes.
pub fn horizontal_rule(width: usize) -> String {
    "─".repeat(width)
}

pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}
