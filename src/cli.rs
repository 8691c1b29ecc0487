//! CLI definitions for dashkit
//!
//! The clap structure lives here, apart from main.rs, together with the
//! value parsers for column specs and alignments.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use dashkit::{Align, ColorMode, ColumnSpec};

/// Build clap styles matching the widget defaults.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "dashkit")]
#[command(about = "Render fixed-width terminal widgets: boxes, tables, bars and sparklines")]
#[command(
    long_about = "dashkit renders styled, fixed-width terminal output.

Every line it prints occupies exactly the requested number of columns,
whatever escape codes or wide characters the input contains, and never
leaves a color or a half-written control sequence behind.

EXAMPLES:
    dashkit box --title CPU --width 30 'load 0.42' 'temp 51C'
    ps -eo comm,pid | dashkit table -c NAME:flex -c PID:fixed=8:right
    dashkit bar 73 --label mem --width 24
    dashkit spark 1 4 2 8 5 7 --width 10
    dashkit -e truncate '\\e[31mred alert\\e[0m' 3"
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    /// Config file (defaults to ~/.config/dashkit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to emit color codes
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorArg>,

    /// Interpret \e, \x1b and \033 in text arguments as ESC
    #[arg(short = 'e', long = "escapes", global = true)]
    pub escapes: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// `--color` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the visible width of TEXT in terminal columns
    Width {
        text: String,
    },

    /// Cut TEXT to at most MAX columns without splitting escape codes
    Truncate {
        text: String,
        max: usize,
        /// Mark the cut with an ellipsis
        #[arg(long)]
        ellipsis: bool,
    },

    /// Pad or cut TEXT to exactly WIDTH columns (printed between | marks)
    Pad {
        text: String,
        width: usize,
        #[arg(long, short, default_value = "left", value_parser = parse_align)]
        align: Align,
    },

    /// Draw a bordered box around LINES (or stdin when none are given)
    #[command(name = "box")]
    Box {
        #[arg(long, short)]
        title: Option<String>,
        /// Total width including borders
        #[arg(long, short)]
        width: Option<usize>,
        /// rounded, square, double or ascii
        #[arg(long, short)]
        style: Option<String>,
        lines: Vec<String>,
    },

    /// Render tab-separated rows from stdin as a table
    #[command(long_about = "Render rows read from stdin as a table.

Each input line is one row; cells are split on the delimiter (a tab by
default). Columns are declared with -c/--column, one per flag:

    HEADER[:fixed=N][:flex][:min=N][:max=N][:left|right|center]

EXAMPLE:
    printf 'api\\t1234\\trunning\\n' | dashkit table -c NAME:flex:min=8 -c PID:fixed=6:right -c STATE")]
    Table {
        #[arg(long = "column", short = 'c', required = true, value_parser = parse_column_spec)]
        columns: Vec<ColumnSpec>,
        /// Total width budget
        #[arg(long, short)]
        width: Option<usize>,
        #[arg(long)]
        separator: Option<String>,
        /// Cell delimiter in the input
        #[arg(long, short, default_value = "\t")]
        delimiter: char,
        /// Omit the rule under the header
        #[arg(long)]
        compact: bool,
        #[arg(long)]
        no_header: bool,
    },

    /// Print the column widths a table would use
    Widths {
        #[arg(long = "column", short = 'c', required = true, value_parser = parse_column_spec)]
        columns: Vec<ColumnSpec>,
        #[arg(long, short)]
        width: Option<usize>,
        #[arg(long)]
        separator: Option<String>,
        #[arg(long, short, default_value = "\t")]
        delimiter: char,
        /// Print JSON instead of space-separated numbers
        #[arg(long)]
        json: bool,
    },

    /// Print the widths of PARTS side-by-side panels sharing the width
    Split {
        parts: usize,
        /// Columns between adjacent panels
        #[arg(long, short, default_value_t = 1)]
        gap: usize,
        #[arg(long, short)]
        width: Option<usize>,
    },

    /// Draw a progress bar at PERCENT
    Bar {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
        /// Width of the bar including brackets
        #[arg(long, short)]
        width: Option<usize>,
        #[arg(long, short)]
        label: Option<String>,
        /// block, bracket or ascii
        #[arg(long, short)]
        style: Option<String>,
        /// Hide the percentage after the bar
        #[arg(long)]
        no_value: bool,
    },

    /// Draw a sparkline of VALUES (newest last)
    Spark {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
        #[arg(long, short)]
        width: Option<usize>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `left`, `right` or `center`.
pub fn parse_align(s: &str) -> Result<Align, String> {
    Align::from_name(s).ok_or_else(|| format!("invalid alignment '{}' (left, right, center)", s))
}

/// Parse `HEADER[:fixed=N][:flex][:min=N][:max=N][:ALIGN]`.
pub fn parse_column_spec(s: &str) -> Result<ColumnSpec, String> {
    let mut parts = s.split(':');
    let header = parts.next().unwrap_or_default();
    let mut spec = ColumnSpec::auto(header, Align::Left);

    for part in parts {
        let (key, value) = match part.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (part, None),
        };
        let number = |v: Option<&str>| -> Result<usize, String> {
            v.ok_or_else(|| format!("'{}' needs a value in column '{}'", key, s))?
                .parse::<usize>()
                .map_err(|e| format!("bad number for '{}' in column '{}': {}", key, s, e))
        };

        match key {
            "fixed" => spec.fixed_width = number(value)?,
            "min" => spec.min_width = number(value)?,
            "max" => spec.max_width = number(value)?,
            "flex" => spec.flexible = true,
            "align" => {
                spec.align = parse_align(value.unwrap_or_default())?;
            }
            other => {
                spec.align = Align::from_name(other)
                    .ok_or_else(|| format!("unknown option '{}' in column '{}'", other, s))?;
            }
        }
    }

    Ok(spec)
}
