//! issue-xlsx - issue-tracker JSON exports to formatted Excel
//!
//! This library reads a Bitbucket-style issue export (a JSON object with an
//! `issues` array) and writes one formatted worksheet with a row per issue.
//!
//! # Features
//!
//! - Fixed column layout: Title, Description, Date added, Kind, Priority, Status
//! - Per-record validation with typed errors (missing field, bad timestamp)
//! - Header styling, column widths and substring-based cell coloring
//! - Explicit [`ExportOptions`] instead of global writer state
//!
//! # Example
//!
//! ```no_run
//! use issue_xlsx::{convert, ConvertOutcome, ExportOptions};
//! use std::path::Path;
//!
//! let outcome = convert(
//!     Path::new("issues.json"),
//!     Path::new("issues.xlsx"),
//!     &ExportOptions::default(),
//! )?;
//!
//! if let ConvertOutcome::Written { rows, .. } = outcome {
//!     println!("Rows: {}", rows);
//! }
//! # Ok::<(), issue_xlsx::error::ConvertError>(())
//! ```

pub mod cli;
pub mod convert;
pub mod dates;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use convert::{convert, ConvertOutcome};
pub use error::{ConvertError, ConvertResult};
pub use excel::{ExportOptions, FormatRange};
pub use types::{Column, Issue, IssueRow, IssueTable};
