//! The issue export → spreadsheet conversion

use crate::error::ConvertResult;
use crate::excel::{ExportOptions, IssueExporter};
use crate::parser;
use crate::types::IssueTable;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a conversion that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The workbook was written with `rows` data rows.
    Written { output: PathBuf, rows: usize },
    /// The export has no `issues` field; nothing was written.
    NoIssues,
}

/// Parse `input` and build its table. `Ok(None)` when there is no `issues` field.
///
/// Every record is validated here, so a bad record fails before any output
/// file is touched.
pub fn load_table(input: &Path) -> ConvertResult<Option<IssueTable>> {
    let Some(issues) = parser::parse_export(input)? else {
        return Ok(None);
    };
    debug!(count = issues.len(), "issues parsed");

    IssueTable::from_issues(&issues).map(Some)
}

/// Convert the JSON export at `input` into a spreadsheet at `output`.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> ConvertResult<ConvertOutcome> {
    let Some(table) = load_table(input)? else {
        info!(input = %input.display(), "no issues found");
        return Ok(ConvertOutcome::NoIssues);
    };

    let rows = table.len();
    IssueExporter::with_options(table, options.clone()).export(output)?;
    info!(output = %output.display(), rows, "issues exported");

    Ok(ConvertOutcome::Written {
        output: output.to_path_buf(),
        rows,
    })
}
