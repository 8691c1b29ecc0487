//! dashkit library
//!
//! ANSI-aware text layout and fixed-width widgets for terminal dashboards.
//! Every rendered line occupies exactly the requested number of columns and
//! never leaves a half-written control sequence or an open color behind.

pub mod config;
pub mod layout;
pub mod text;
pub mod theme;
pub mod widgets;

pub use config::{ColorMode, Config, ConfigError};
pub use layout::{allocate_widths, split_columns, split_rows, Align, ColumnSpec};
pub use text::{ellipsize, pad, strip_control, truncate, visible_width};
pub use theme::Palette;
pub use widgets::{
    BarConfig, BarStyle, BorderBox, BoxConfig, BoxStyle, ProgressBar, SparkConfig, Sparkline,
    Table, TableConfig,
};
