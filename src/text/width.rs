//! Display width measurement.

use unicode_width::UnicodeWidthChar;

use super::scanner::{scan, Segment};

/// Terminal columns occupied by a single character.
///
/// Wide East-Asian characters and emoji count 2, combining marks count 0,
/// and characters without a defined width (control characters) count 0.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Terminal columns occupied by `s`, ignoring control sequences.
///
/// Never fails; the empty string and strings made only of control
/// sequences measure 0. An unterminated sequence at the end of `s`
/// measures 0 as well, since the terminal would swallow it.
pub fn visible_width(s: &str) -> usize {
    scan(s)
        .map(|seg| match seg {
            Segment::Visible(c) => char_width(c),
            Segment::Control(_) | Segment::Unterminated(_) => 0,
        })
        .sum()
}
