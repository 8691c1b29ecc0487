//! width, truncate and pad command handlers

use anyhow::Result;

use dashkit::{ellipsize, pad, truncate, visible_width, Align};

use super::Context;

/// Print the visible width of `text`.
#[cfg(not(tarpaulin_include))]
pub fn handle_width(ctx: &Context, text: &str) -> Result<()> {
    println!("{}", visible_width(&ctx.text(text)));
    Ok(())
}

/// Print `text` cut to `max` columns.
#[cfg(not(tarpaulin_include))]
pub fn handle_truncate(ctx: &Context, text: &str, max: usize, ellipsis: bool) -> Result<()> {
    println!("{}", render_truncate(ctx, text, max, ellipsis));
    Ok(())
}

/// Print `text` fitted to `width` between `|` marks.
#[cfg(not(tarpaulin_include))]
pub fn handle_pad(ctx: &Context, text: &str, width: usize, align: Align) -> Result<()> {
    println!("{}", render_pad(ctx, text, width, align));
    Ok(())
}

pub(crate) fn render_truncate(ctx: &Context, text: &str, max: usize, ellipsis: bool) -> String {
    let text = ctx.text(text);
    let out = if ellipsis {
        ellipsize(&text, max)
    } else {
        truncate(&text, max)
    };
    ctx.finish(&out)
}

pub(crate) fn render_pad(ctx: &Context, text: &str, width: usize, align: Align) -> String {
    let padded = pad(&ctx.text(text), width, align);
    format!("|{}|", ctx.finish(&padded))
}
