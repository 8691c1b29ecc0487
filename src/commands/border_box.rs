//! box command handler

use anyhow::{anyhow, Result};

use dashkit::{BorderBox, BoxConfig, BoxStyle};

use super::{read_stdin_lines, Context};

/// Draw a box around `lines`, or around stdin when no lines are given.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    ctx: &Context,
    title: Option<&str>,
    width: Option<usize>,
    style: Option<&str>,
    lines: &[String],
) -> Result<()> {
    let lines = if lines.is_empty() {
        read_stdin_lines()?
    } else {
        lines.to_vec()
    };
    println!("{}", render(ctx, title, width, style, &lines)?);
    Ok(())
}

pub(crate) fn render(
    ctx: &Context,
    title: Option<&str>,
    width: Option<usize>,
    style: Option<&str>,
    lines: &[String],
) -> Result<String> {
    let style = match style {
        Some(name) => BoxStyle::by_name(name).ok_or_else(|| {
            anyhow!(
                "Unknown box style '{}' (rounded, square, double, ascii)",
                name
            )
        })?,
        None => ctx.config.box_style()?,
    };

    let mut config = BoxConfig::from_palette(&ctx.palette, ctx.width_or_default(width));
    config.style = style;
    if let Some(title) = title {
        config = config.with_title(ctx.text(title));
    }

    let lines = lines.iter().map(|line| ctx.text(line)).collect();
    Ok(ctx.finish(&BorderBox::new(config, lines).render()))
}
