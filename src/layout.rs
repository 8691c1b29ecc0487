//! Column width allocation for tables, and even splits for panels.
//!
//! Widths are resolved in two passes. The first sizes every column on its
//! own: fixed columns take their fixed width, flexible columns start at
//! their minimum, and auto columns grow to fit their header and cells up to
//! an optional cap. The second pass splits whatever budget is left evenly
//! across the flexible columns. Columns are never shrunk below what the
//! first pass asked for, so a table may overflow its budget.
//!
//! [`split_columns`] and [`split_rows`] divide a dashboard region into equal
//! panels instead, handing the remainder to the last one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::visible_width;

/// Horizontal alignment of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    /// Parse `left`, `right` or `center` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Align::Left),
            "right" | "r" => Some(Align::Right),
            "center" | "centre" | "c" => Some(Align::Center),
            _ => None,
        }
    }
}

/// Sizing rules for one table column.
///
/// A non-zero `fixed_width` wins over everything else. Otherwise a
/// `flexible` column starts at `min_width` and absorbs leftover space, and
/// any other column sizes itself to its content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    /// Exact width; 0 means unset.
    #[serde(default)]
    pub fixed_width: usize,
    #[serde(default)]
    pub min_width: usize,
    /// Upper bound for auto and flexible columns; 0 means unlimited.
    #[serde(default)]
    pub max_width: usize,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub flexible: bool,
}

impl ColumnSpec {
    /// A column sized to its content.
    pub fn auto(header: impl Into<String>, align: Align) -> Self {
        Self {
            header: header.into(),
            align,
            ..Self::default()
        }
    }

    /// A column with an exact width.
    pub fn fixed(header: impl Into<String>, width: usize, align: Align) -> Self {
        Self {
            header: header.into(),
            fixed_width: width,
            align,
            ..Self::default()
        }
    }

    /// A column that fills leftover space, starting from `min_width`.
    pub fn flex(header: impl Into<String>, min_width: usize, align: Align) -> Self {
        Self {
            header: header.into(),
            min_width,
            align,
            flexible: true,
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_max(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    fn cap(&self, width: usize) -> usize {
        if self.max_width > 0 && width > self.max_width {
            self.max_width
        } else {
            width
        }
    }

    fn content_width(&self, index: usize, rows: &[Vec<String>]) -> usize {
        rows.iter()
            .filter_map(|row| row.get(index))
            .map(|cell| visible_width(cell))
            .max()
            .unwrap_or(0)
    }
}

/// Compute one width per column, in column order.
///
/// `separator` is measured by visible width and counted once between each
/// pair of adjacent columns. Leftover budget is divided among flexible
/// columns by floor division; the remainder is dropped, not handed out.
pub fn allocate_widths(
    columns: &[ColumnSpec],
    rows: &[Vec<String>],
    total_width: usize,
    separator: &str,
) -> Vec<usize> {
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            if col.fixed_width > 0 {
                col.fixed_width
            } else if col.flexible {
                col.min_width
            } else {
                let natural = col
                    .min_width
                    .max(visible_width(&col.header))
                    .max(col.content_width(i, rows));
                col.cap(natural)
            }
        })
        .collect();

    let flex_count = columns
        .iter()
        .filter(|c| c.fixed_width == 0 && c.flexible)
        .count();
    let used = used_width(&widths, separator);

    if flex_count > 0 && used < total_width {
        let extra = (total_width - used) / flex_count;
        for (width, col) in widths.iter_mut().zip(columns) {
            if col.fixed_width == 0 && col.flexible {
                *width = col.cap(*width + extra);
            }
        }
    }

    debug!(
        columns = columns.len(),
        flex = flex_count,
        used,
        budget = total_width,
        widths = ?widths,
        "allocated column widths"
    );

    widths
}

/// Columns plus separators: what a row of these widths occupies.
pub fn used_width(widths: &[usize], separator: &str) -> usize {
    let seps = widths.len().saturating_sub(1) * visible_width(separator);
    widths.iter().sum::<usize>() + seps
}

/// Split `width` into `n` side-by-side panels separated by `gap` columns.
///
/// Every panel gets the same floor share and the last one absorbs the
/// remainder, so panels plus gaps add up to `width` whenever the gaps fit.
/// `n == 0` yields no panels and `n == 1` yields the whole width.
pub fn split_columns(width: usize, n: usize, gap: usize) -> Vec<usize> {
    match n {
        0 => Vec::new(),
        1 => vec![width],
        _ => {
            let available = width.saturating_sub((n - 1) * gap);
            let mut parts = vec![available / n; n];
            if let Some(last) = parts.last_mut() {
                *last += available % n;
            }
            parts
        }
    }
}

/// Split `height` into `n` stacked panels; the last one absorbs the remainder.
pub fn split_rows(height: usize, n: usize) -> Vec<usize> {
    split_columns(height, n, 0)
}
