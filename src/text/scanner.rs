//! Two-state control sequence scanner.
//!
//! Every escape-aware operation in the crate walks text through [`Scanner`],
//! so measurement and truncation always agree on where a control sequence
//! starts and ends.
//!
//! The terminator rule is deliberately narrow: a sequence opens at ESC and
//! closes at the first ASCII letter (`a`-`z`, `A`-`Z`). This matches the
//! single-ESC CSI sequences produced by color and cursor codes. OSC strings
//! and sequences ending in punctuation are not recognized as such.

/// Escape marker that opens a control sequence.
pub const ESC: char = '\x1b';

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Plain text; characters contribute to display width.
    Normal,
    /// Inside a control sequence; characters have zero width.
    InControl,
}

impl ScanState {
    /// Advance the machine by one character.
    ///
    /// ESC enters `InControl`. An ASCII letter leaves it. Nothing else
    /// changes state.
    pub fn next(self, c: char) -> ScanState {
        match self {
            ScanState::Normal if c == ESC => ScanState::InControl,
            ScanState::Normal => ScanState::Normal,
            ScanState::InControl if c.is_ascii_alphabetic() => ScanState::Normal,
            ScanState::InControl => ScanState::InControl,
        }
    }
}

/// One piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A character on the visible channel.
    Visible(char),
    /// A complete control sequence, ESC through its terminating letter.
    Control(&'a str),
    /// A control sequence that was still open when the input ended.
    Unterminated(&'a str),
}

/// Iterator splitting a string into visible characters and control sequences.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;

        if first != ESC {
            self.pos += first.len_utf8();
            return Some(Segment::Visible(first));
        }

        let start = self.pos;
        let mut state = ScanState::Normal.next(first);
        let mut end = start + first.len_utf8();

        for c in rest[first.len_utf8()..].chars() {
            end += c.len_utf8();
            state = state.next(c);
            if state == ScanState::Normal {
                self.pos = end;
                return Some(Segment::Control(&self.input[start..end]));
            }
        }

        self.pos = self.input.len();
        Some(Segment::Unterminated(&self.input[start..]))
    }
}

/// Scan `input` into segments.
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// `input` without the control sequence still open at its end, if any.
///
/// Text appended after an open sequence would be read as part of it, so
/// anything that pads or frames a string cuts the open tail first.
pub fn trim_unterminated(input: &str) -> &str {
    match scan(input).last() {
        Some(Segment::Unterminated(seq)) => &input[..input.len() - seq.len()],
        _ => input,
    }
}
