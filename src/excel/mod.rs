//! Excel export for issue tables
//!
//! - `exporter`: writes the single "Sheet1" worksheet
//! - `styles`: header/column formats and conditional coloring rules
//! - `options`: explicit write-time settings

mod exporter;
mod options;
pub mod styles;

pub use exporter::IssueExporter;
pub use options::{ExportOptions, FormatRange};
pub use styles::{resolve_fill, ColorRule, Fill, COLOR_RULES};
