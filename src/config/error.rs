//! Errors for config values that parse as TOML but mean nothing to us.

/// A config value that cannot be turned into a style.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid color for {field}: '{value}'. Use a name like 'cyan', an index 0-255, or '#rrggbb'.")]
    InvalidColor { field: &'static str, value: String },

    #[error("Unknown {kind} style '{name}'. Expected one of: {expected}")]
    UnknownStyle {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
}
