use crate::convert::{self as converter, ConvertOutcome};
use crate::error::ConvertResult;
use crate::excel::{ExportOptions, FormatRange};
use crate::types::IssueTable;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Prefix the output file name with `date` as `YYYYMMDD_`, keeping its directory.
pub fn date_prefixed_path(output: &Path, date: NaiveDate) -> PathBuf {
    match output.file_name() {
        Some(name) => output.with_file_name(format!(
            "{}_{}",
            date.format("%Y%m%d"),
            name.to_string_lossy()
        )),
        None => output.to_path_buf(),
    }
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    date_prefix: bool,
    options: ExportOptions,
    verbose: bool,
) -> ConvertResult<ConvertOutcome> {
    let output = if date_prefix {
        date_prefixed_path(&output, Local::now().date_naive())
    } else {
        output
    };

    println!("{}", "📋 Issue export".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading issues...".cyan());
        println!("   Sheet: {}", options.sheet_name);
        println!("   Zoom:  {}%", options.zoom);
        if options.format_range == FormatRange::Legacy {
            println!("   Coloring limited to rows 2-12 (legacy range)");
        }
        if !options.header_style {
            println!("   Header styling disabled");
        }
        println!();
    }

    let outcome = converter::convert(&input, &output, &options)?;

    match &outcome {
        ConvertOutcome::Written { output, rows } => {
            println!("{}", "✅ Export Complete!".bold().green());
            println!("   {} issues written", rows.to_string().bold());
            println!("   Excel file: {}\n", output.display());
        }
        ConvertOutcome::NoIssues => {
            println!(
                "{}",
                "⚠️  No issues found - nothing was written".yellow()
            );
        }
    }

    Ok(outcome)
}

/// Issue counts reported by the check command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub issues: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl CheckSummary {
    pub fn from_table(table: &IssueTable) -> Self {
        let mut summary = Self {
            issues: table.len(),
            ..Self::default()
        };
        for row in table.rows() {
            *summary.by_kind.entry(row.kind.clone()).or_insert(0) += 1;
            *summary.by_status.entry(row.status.clone()).or_insert(0) += 1;
        }
        summary
    }
}

/// Execute the check command: validate an export without writing anything.
///
/// Returns `None` when the export has no `issues` field.
pub fn check(input: PathBuf, verbose: bool) -> ConvertResult<Option<CheckSummary>> {
    println!("{}", "🔍 Checking issue export".bold().green());
    println!("   File: {}\n", input.display());

    let Some(table) = converter::load_table(&input)? else {
        println!(
            "{}",
            "⚠️  No issues found - the export has no 'issues' field".yellow()
        );
        return Ok(None);
    };

    let summary = CheckSummary::from_table(&table);

    println!("{}", "✅ Export is valid".bold().green());
    println!("   {} issues\n", summary.issues.to_string().bold());

    print_tally("Kind", &summary.by_kind);
    print_tally("Status", &summary.by_status);

    if verbose {
        println!("{}", "📄 Rows:".cyan());
        for (idx, row) in table.rows().iter().enumerate() {
            println!("   [{}] {} ({})", idx, row.title, row.date_added.trim_end());
        }
        println!();
    }

    Ok(Some(summary))
}

fn print_tally(label: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    println!("   {}:", label.bright_blue().bold());
    for (value, count) in counts {
        println!("      {:<16} {}", value, count);
    }
    println!();
}
