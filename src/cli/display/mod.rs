//! Display module for formatted CLI output

pub mod colors;
pub mod icons;
pub mod output;
pub mod table;

pub use colors::ColorTheme;
pub use icons::StatusIcon;
pub use output::OutputFormat;
pub use table::TableRenderer;
