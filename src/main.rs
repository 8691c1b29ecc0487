//! dashkit - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};
use commands::bar::BarArgs;
use commands::table::TableArgs;
use commands::Context;

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "dashkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // These never read the config file, so they work even when it is broken.
    match cli.command {
        Commands::Completions { shell } => return commands::completions::handle::<Cli>(shell),
        Commands::Config(ConfigCommands::Path) => {
            let path = commands::resolve_config_path(cli.config.as_deref())?;
            return commands::config::handle_path(&path);
        }
        Commands::Config(ConfigCommands::Init { force }) => {
            let path = commands::resolve_config_path(cli.config.as_deref())?;
            return commands::config::handle_init(&path, force);
        }
        _ => {}
    }

    let ctx = Context::load(
        cli.config.as_deref(),
        cli.color.map(Into::into),
        cli.escapes,
    )?;

    match cli.command {
        Commands::Width { text } => commands::text::handle_width(&ctx, &text),
        Commands::Truncate {
            text,
            max,
            ellipsis,
        } => commands::text::handle_truncate(&ctx, &text, max, ellipsis),
        Commands::Pad { text, width, align } => {
            commands::text::handle_pad(&ctx, &text, width, align)
        }
        Commands::Box {
            title,
            width,
            style,
            lines,
        } => commands::border_box::handle(
            &ctx,
            title.as_deref(),
            width,
            style.as_deref(),
            &lines,
        ),
        Commands::Table {
            columns,
            width,
            separator,
            delimiter,
            compact,
            no_header,
        } => commands::table::handle_table(
            &ctx,
            TableArgs {
                columns,
                width,
                separator,
                delimiter,
            },
            compact,
            no_header,
        ),
        Commands::Widths {
            columns,
            width,
            separator,
            delimiter,
            json,
        } => commands::table::handle_widths(
            &ctx,
            TableArgs {
                columns,
                width,
                separator,
                delimiter,
            },
            json,
        ),
        Commands::Bar {
            percent,
            width,
            label,
            style,
            no_value,
        } => commands::bar::handle(
            &ctx,
            percent,
            BarArgs {
                width,
                label,
                style,
                no_value,
            },
        ),
        Commands::Split { parts, gap, width } => {
            commands::table::handle_split(&ctx, parts, gap, width)
        }
        Commands::Spark { values, width } => commands::spark::handle(&ctx, &values, width),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&ctx),
        Commands::Config(_) | Commands::Completions { .. } => Ok(()),
    }
}
