//! Data table with escape-aware column sizing.

use ratatui::style::{Color, Style};

use crate::layout::{allocate_widths, ColumnSpec};
use crate::text::{horizontal_rule, pad};
use crate::theme::{paint, Palette};

/// Table appearance and budget.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Total width budget, separators included
    pub width: usize,
    /// Drawn between adjacent columns
    pub separator: String,
    pub show_header: bool,
    pub header_style: Style,
    /// Color of the rule under the header
    pub rule_color: Color,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::from_palette(&Palette::default(), 80)
    }
}

impl TableConfig {
    pub fn from_palette(palette: &Palette, width: usize) -> Self {
        Self {
            width,
            separator: "  ".to_string(),
            show_header: true,
            header_style: palette.header,
            rule_color: palette.rule,
        }
    }
}

/// Columns, rows and config, rendered on demand.
///
/// Rows need not match the column count: missing cells render empty and
/// cells past the last column are ignored.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(config: TableConfig, columns: Vec<ColumnSpec>, rows: Vec<Vec<String>>) -> Self {
        Self {
            config,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    /// Render rows only.
    pub fn without_header(mut self) -> Self {
        self.config.show_header = false;
        self
    }

    /// Resolved width of every column.
    pub fn widths(&self) -> Vec<usize> {
        allocate_widths(
            &self.columns,
            &self.rows,
            self.config.width,
            &self.config.separator,
        )
    }

    /// Header, rule under the header, then rows. No trailing newline.
    pub fn render(&self) -> String {
        self.render_with(true)
    }

    /// Like [`Table::render`] but without the rule under the header.
    pub fn render_compact(&self) -> String {
        self.render_with(false)
    }

    fn render_with(&self, rule: bool) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        if self.config.show_header {
            let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
            lines.push(paint(
                self.config.header_style,
                &self.row_line(&headers, &widths),
            ));

            if rule {
                let rules: Vec<String> = widths.iter().map(|&w| horizontal_rule(w)).collect();
                lines.push(paint(
                    Style::default().fg(self.config.rule_color),
                    &rules.join(&self.config.separator),
                ));
            }
        }

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(self.row_line(&cells, &widths));
        }

        lines.join("\n")
    }

    fn row_line(&self, cells: &[&str], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, &w))| pad(cells.get(i).copied().unwrap_or(""), w, col.align))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }
}
