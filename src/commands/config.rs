//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use dashkit::Config;

use super::Context;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(ctx: &Context) -> Result<()> {
    print!("{}", render_show(&ctx.config, &ctx.config_path)?);
    Ok(())
}

/// Print the config file path in use.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write a default config file.
///
/// Takes a path instead of a [`Context`] so a broken config can be replaced.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    init_at(path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Effective config as TOML, headed by a comment naming the file it came from.
pub(crate) fn render_show(config: &Config, path: &Path) -> Result<String> {
    Ok(format!(
        "# {}\n\n{}",
        path.display(),
        toml::to_string_pretty(config)?
    ))
}

/// Save the default config at `path`, refusing to overwrite without `force`.
pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
