//! Escape-safe truncation.

use tracing::trace;

use super::scanner::{scan, trim_unterminated, Segment};
use super::width::{char_width, visible_width};
use crate::theme::ansi::RESET;

/// Ellipsis appended by [`ellipsize`]; one column wide.
pub const ELLIPSIS: &str = "…";

/// Cut `s` down to at most `max` visible columns.
///
/// Complete control sequences are copied whether or not any visible text
/// follows them, and never count against `max`. Copying stops at the first
/// visible character that would push the width past `max`. A sequence left
/// open at the end of the input is dropped rather than emitted half-way.
///
/// The result always ends with [`RESET`] so styling inside `s` cannot bleed
/// into whatever is written next. When the kept text already ends with a
/// reset, no second one is added, which keeps `truncate` idempotent.
pub fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(s.len() + RESET.len());
    let mut visible = 0;

    for seg in scan(s) {
        match seg {
            Segment::Control(seq) => out.push_str(seq),
            Segment::Visible(c) => {
                let w = char_width(c);
                if visible + w > max {
                    break;
                }
                out.push(c);
                visible += w;
            }
            Segment::Unterminated(seq) => {
                trace!(len = seq.len(), "dropping unterminated control sequence");
            }
        }
    }

    if !out.ends_with(RESET) {
        out.push_str(RESET);
    }
    out
}

/// Truncate to `max` columns, marking the cut with an ellipsis.
///
/// Text that already fits is returned unchanged, minus any control sequence
/// left open at its end. For `max <= 3` there is
/// no room for a meaningful marker and this falls back to [`truncate`].
pub fn ellipsize(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if visible_width(s) <= max {
        return trim_unterminated(s).to_string();
    }
    if max <= 3 {
        return truncate(s, max);
    }
    format!("{}{}", truncate(s, max - 1), ELLIPSIS)
}

/// Drop every control sequence, keeping only the visible channel.
pub fn strip_control(s: &str) -> String {
    scan(s)
        .filter_map(|seg| match seg {
            Segment::Visible(c) => Some(c),
            _ => None,
        })
        .collect()
}
