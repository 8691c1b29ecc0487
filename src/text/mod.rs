//! ANSI-aware text layout.
//!
//! Strings handled here carry two interleaved channels: visible characters,
//! which take up terminal columns, and control sequences, which take none
//! and must never be split. Everything is built on the shared [`scanner`]:
//! - width: column measurement
//! - truncate: cutting to a column budget, always ending in a reset
//! - pad: exact-width fitting with alignment

pub mod pad;
pub mod scanner;
pub mod truncate;
pub mod width;

pub use pad::{horizontal_rule, pad, pad_left, pad_right};
pub use scanner::{scan, trim_unterminated, ScanState, Scanner, Segment, ESC};
pub use truncate::{ellipsize, strip_control, truncate, ELLIPSIS};
pub use width::{char_width, visible_width};
