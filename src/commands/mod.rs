//! Command handlers for the dashkit CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod bar;
pub mod border_box;
pub mod completions;
pub mod config;
pub mod spark;
pub mod table;
pub mod text;

use anyhow::{Context as _, Result};
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::debug;

use dashkit::config::FALLBACK_WIDTH;
use dashkit::{strip_control, ColorMode, Config, Palette};

/// Settings every command renders with, resolved once from flags, config
/// and environment.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub palette: Palette,
    /// Emit color codes
    pub color: bool,
    /// Interpret `\e` style escapes in text arguments
    pub escapes: bool,
    /// Width used when a command gets no explicit width
    pub width: usize,
}

impl Context {
    /// Load the config and resolve color and width.
    pub fn load(
        config_path: Option<&Path>,
        color: Option<ColorMode>,
        escapes: bool,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let config = Config::load_from(&config_path)?;
        let palette = config.palette()?;

        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let color = color
            .unwrap_or(config.display.color)
            .enabled(no_color_env, io::stdout().is_terminal());
        let width = resolve_width(config.display.width, detect_terminal_width());

        debug!(path = %config_path.display(), color, width, "resolved context");
        Ok(Self {
            config,
            config_path,
            palette,
            color,
            escapes,
            width,
        })
    }

    /// Context for rendering in tests: default config, no color, fixed width.
    #[cfg(test)]
    pub fn plain(width: usize) -> Self {
        let config = Config::default();
        Self {
            palette: Palette::default(),
            config,
            config_path: PathBuf::from("config.toml"),
            color: false,
            escapes: false,
            width,
        }
    }

    /// A text argument, with escapes interpreted when `-e` was given.
    pub fn text(&self, s: &str) -> String {
        if self.escapes {
            interpret_escapes(s)
        } else {
            s.to_string()
        }
    }

    /// Explicit width, or the resolved default.
    pub fn width_or_default(&self, explicit: Option<usize>) -> usize {
        explicit.unwrap_or(self.width)
    }

    /// Final form of rendered output: control sequences removed when color
    /// is off.
    pub fn finish(&self, rendered: &str) -> String {
        if self.color {
            rendered.to_string()
        } else {
            strip_control(rendered)
        }
    }
}

/// The `--config` path, or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Configured width when set, else the terminal's, else the fallback.
pub fn resolve_width(configured: usize, terminal: Option<usize>) -> usize {
    if configured > 0 {
        return configured;
    }
    terminal.filter(|&w| w > 0).unwrap_or(FALLBACK_WIDTH)
}

fn detect_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| usize::from(w))
}

/// Replace `\e`, `\x1b`, `\x1B` and `\033` with ESC and `\\` with a single
/// backslash. Any other backslash is kept as is.
pub fn interpret_escapes(s: &str) -> String {
    const ESC: char = '\x1b';
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let (replacement, consumed) = if tail.starts_with('e') {
            (Some(ESC), 1)
        } else if tail.starts_with("x1b") || tail.starts_with("x1B") || tail.starts_with("033") {
            (Some(ESC), 3)
        } else if tail.starts_with('\\') {
            (Some('\\'), 1)
        } else {
            (None, 0)
        };

        match replacement {
            Some(c) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('\\');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Lines from stdin, or nothing when stdin is an interactive terminal.
pub fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    stdin
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read stdin")
}
