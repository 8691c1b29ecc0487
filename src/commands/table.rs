//! table, widths and split command handlers

use anyhow::Result;
use serde::Serialize;

use dashkit::layout::{split_columns, used_width};
use dashkit::{ColumnSpec, Table, TableConfig};

use super::{read_stdin_lines, Context};

/// Options shared by `table` and `widths`.
#[derive(Debug, Clone)]
pub struct TableArgs {
    pub columns: Vec<ColumnSpec>,
    pub width: Option<usize>,
    pub separator: Option<String>,
    pub delimiter: char,
}

/// Allocation summary printed by `widths --json`.
#[derive(Debug, Serialize)]
struct WidthReport<'a> {
    budget: usize,
    used: usize,
    columns: Vec<ColumnWidth<'a>>,
}

#[derive(Debug, Serialize)]
struct ColumnWidth<'a> {
    header: &'a str,
    width: usize,
}

/// Render stdin rows as a table.
#[cfg(not(tarpaulin_include))]
pub fn handle_table(ctx: &Context, args: TableArgs, compact: bool, no_header: bool) -> Result<()> {
    let rows = split_rows(&read_stdin_lines()?, args.delimiter);
    let out = render_table(ctx, args, rows, compact, no_header);
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Print the widths a table over stdin rows would get.
#[cfg(not(tarpaulin_include))]
pub fn handle_widths(ctx: &Context, args: TableArgs, json: bool) -> Result<()> {
    let rows = split_rows(&read_stdin_lines()?, args.delimiter);
    println!("{}", render_widths(ctx, args, rows, json)?);
    Ok(())
}

/// Print panel widths for a row of `parts` panels.
#[cfg(not(tarpaulin_include))]
pub fn handle_split(ctx: &Context, parts: usize, gap: usize, width: Option<usize>) -> Result<()> {
    println!("{}", render_split(ctx, parts, gap, width));
    Ok(())
}

/// Split each line into cells on `delimiter`.
pub fn split_rows(lines: &[String], delimiter: char) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| line.split(delimiter).map(str::to_string).collect())
        .collect()
}

fn build_table(ctx: &Context, args: TableArgs, rows: Vec<Vec<String>>) -> Table {
    let mut config = TableConfig::from_palette(&ctx.palette, ctx.width_or_default(args.width));
    config.separator = args
        .separator
        .map(|s| ctx.text(&s))
        .unwrap_or_else(|| ctx.config.table.separator.clone());

    let rows = rows
        .into_iter()
        .map(|row| row.iter().map(|cell| ctx.text(cell)).collect())
        .collect();
    Table::new(config, args.columns, rows)
}

pub(crate) fn render_table(
    ctx: &Context,
    args: TableArgs,
    rows: Vec<Vec<String>>,
    compact: bool,
    no_header: bool,
) -> String {
    let mut table = build_table(ctx, args, rows);
    if no_header {
        table = table.without_header();
    }
    let out = if compact {
        table.render_compact()
    } else {
        table.render()
    };
    ctx.finish(&out)
}

pub(crate) fn render_widths(
    ctx: &Context,
    args: TableArgs,
    rows: Vec<Vec<String>>,
    json: bool,
) -> Result<String> {
    let budget = ctx.width_or_default(args.width);
    let table = build_table(ctx, args, rows);
    let widths = table.widths();

    if !json {
        return Ok(widths
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" "));
    }

    let report = WidthReport {
        budget,
        used: used_width(&widths, table.separator()),
        columns: table
            .columns()
            .iter()
            .zip(&widths)
            .map(|(col, &width)| ColumnWidth {
                header: &col.header,
                width,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub(crate) fn render_split(ctx: &Context, parts: usize, gap: usize, width: Option<usize>) -> String {
    split_columns(ctx.width_or_default(width), parts, gap)
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
