//! spark command handler

use anyhow::Result;

use dashkit::{SparkConfig, Sparkline};

use super::Context;

/// Print a sparkline of `values`.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, values: &[f64], width: Option<usize>) -> Result<()> {
    println!("{}", render(ctx, values, width));
    Ok(())
}

pub(crate) fn render(ctx: &Context, values: &[f64], width: Option<usize>) -> String {
    let config = SparkConfig::from_palette(&ctx.palette, ctx.width_or_default(width));
    ctx.finish(&Sparkline::new(config, values.to_vec()).render())
}
