//! Fixed-width widgets built on the text layout engine.
//!
//! Each widget is a config value plus data, constructed right before a
//! render call. Rendering is a pure function of that value.

pub mod bar;
pub mod border_box;
pub mod sparkline;
pub mod table;

pub use bar::{format_percent, BarConfig, BarStyle, Fill, ProgressBar};
pub use border_box::{BorderBox, BoxConfig, BoxStyle, MIN_BOX_WIDTH};
pub use sparkline::{SparkConfig, Sparkline, SPARKS};
pub use table::{Table, TableConfig};
