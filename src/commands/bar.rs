//! bar command handler

use anyhow::{anyhow, Result};

use dashkit::{visible_width, BarConfig, BarStyle, ProgressBar};

use super::Context;

/// Columns taken by the ` NNN%` suffix.
const VALUE_SUFFIX_WIDTH: usize = 5;

/// Options for `bar`.
#[derive(Debug, Clone, Default)]
pub struct BarArgs {
    pub width: Option<usize>,
    pub label: Option<String>,
    pub style: Option<String>,
    pub no_value: bool,
}

/// Print a progress bar at `percent`.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, percent: f64, args: BarArgs) -> Result<()> {
    println!("{}", render(ctx, percent, args)?);
    Ok(())
}

pub(crate) fn render(ctx: &Context, percent: f64, args: BarArgs) -> Result<String> {
    let style = match args.style.as_deref() {
        Some(name) => BarStyle::by_name(name)
            .ok_or_else(|| anyhow!("Unknown bar style '{}' (block, bracket, ascii)", name))?,
        None => ctx.config.bar_style()?,
    };
    let label = args.label.map(|l| ctx.text(&l)).unwrap_or_default();
    let show_value = !args.no_value && ctx.config.bar.show_value;

    // Without an explicit width the whole line, label and value included,
    // fills the default width.
    let width = args.width.unwrap_or_else(|| {
        let label_width = if label.is_empty() {
            0
        } else {
            visible_width(&label) + 1
        };
        let suffix = if show_value { VALUE_SUFFIX_WIDTH } else { 0 };
        ctx.width.saturating_sub(label_width + suffix)
    });

    let mut config = BarConfig::from_palette(&ctx.palette, width);
    config.style = style;
    config.label = label;
    config.show_value = show_value;

    Ok(ctx.finish(&ProgressBar::new(config, percent).render()))
}
