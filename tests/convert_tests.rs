//! End-to-end conversion tests: JSON export in, workbook read back with calamine

use calamine::{open_workbook, Reader, Xlsx};
use issue_xlsx::{convert, ConvertError, ConvertOutcome, ExportOptions, FormatRange};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn test_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

/// Every cell of `Sheet1` as text, row by row
fn read_sheet(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
    assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);

    let range = workbook
        .worksheet_range("Sheet1")
        .expect("Sheet1 should exist");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn header() -> Vec<String> {
    ["Title", "Description", "Date added", "Kind", "Priority", "Status"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn issue_json(title: &str, kind: &str) -> String {
    format!(
        r#"{{"title": "{}", "content": "c", "created_on": "2018-01-01T00:00:00+00:00",
            "kind": "{}", "priority": "major", "status": "new"}}"#,
        title, kind
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// SUCCESSFUL CONVERSIONS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_realistic_export() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.xlsx");

    let outcome = convert(&test_data("issues.json"), &output, &ExportOptions::default()).unwrap();
    assert_eq!(
        outcome,
        ConvertOutcome::Written {
            output: output.clone(),
            rows: 4
        }
    );

    let rows = read_sheet(&output);
    assert_eq!(rows.len(), 5, "header plus one row per issue");
    assert_eq!(rows[0], header());
    assert_eq!(
        rows[1],
        vec![
            "Crash when saving unnamed project",
            "Saving a project with an empty name throws a null pointer exception.",
            "Thursday 14 12 2017 ",
            "bug",
            "critical",
            "resolved",
        ]
    );
    assert_eq!(
        rows[2],
        vec![
            "Sort by priority",
            "Allow sorting the issue list by priority.",
            "Wednesday 03 01 2018 ",
            "enhancement",
            "major",
            "new",
        ]
    );
    assert_eq!(rows[3][2], "Wednesday 28 02 2018 ");
    assert_eq!(rows[3][1], "Typo on the settings page: \"Langauge\".");
    assert_eq!(rows[4][2], "Monday 05 03 2018 ");
    assert_eq!(rows[4][3], "bug-enhancement");
}

#[test]
fn test_convert_empty_issue_list_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("empty.xlsx");

    let outcome = convert(
        &test_data("empty_issues.json"),
        &output,
        &ExportOptions::default(),
    )
    .unwrap();

    assert!(matches!(outcome, ConvertOutcome::Written { rows: 0, .. }));
    assert_eq!(read_sheet(&output), vec![header()]);
}

#[test]
fn test_convert_preserves_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("ordered.json");
    let output = temp_dir.path().join("ordered.xlsx");

    let titles = ["zeta", "alpha", "mid", "alpha"];
    let issues: Vec<String> = titles.iter().map(|t| issue_json(t, "task")).collect();
    fs::write(&input, format!(r#"{{"issues": [{}]}}"#, issues.join(","))).unwrap();

    convert(&input, &output, &ExportOptions::default()).unwrap();

    let rows = read_sheet(&output);
    let written: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(written, titles.to_vec());
}

#[test]
fn test_convert_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.xlsx");
    fs::write(&output, b"not a workbook").unwrap();

    convert(&test_data("issues.json"), &output, &ExportOptions::default()).unwrap();
    assert_eq!(read_sheet(&output).len(), 5);
}

#[test]
fn test_convert_does_not_modify_input() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("issues.xlsx");
    let input = test_data("issues.json");
    let before = fs::read(&input).unwrap();

    convert(&input, &output, &ExportOptions::default()).unwrap();
    assert_eq!(fs::read(&input).unwrap(), before);
}

#[test]
fn test_convert_legacy_range_writes_every_row() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("many.json");
    let output = temp_dir.path().join("many.xlsx");

    let issues: Vec<String> = (0..15)
        .map(|i| issue_json(&format!("issue {}", i), "bug"))
        .collect();
    fs::write(&input, format!(r#"{{"issues": [{}]}}"#, issues.join(","))).unwrap();

    let options = ExportOptions {
        format_range: FormatRange::Legacy,
        ..ExportOptions::default()
    };
    let outcome = convert(&input, &output, &options).unwrap();
    assert!(matches!(outcome, ConvertOutcome::Written { rows: 15, .. }));

    let rows = read_sheet(&output);
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[15][0], "issue 14");
}

// ═══════════════════════════════════════════════════════════════════════════
// NO-OP AND ERROR CASES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_absent_issues_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.xlsx");

    let outcome = convert(&test_data("no_issues.json"), &output, &ExportOptions::default()).unwrap();
    assert_eq!(outcome, ConvertOutcome::NoIssues);
    assert!(!output.exists());
}

#[test]
fn test_malformed_json_fails_before_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.xlsx");

    let err = convert(&test_data("malformed.json"), &output, &ExportOptions::default())
        .unwrap_err();
    match &err {
        ConvertError::Parse { path, .. } => assert_eq!(path, &test_data("malformed.json")),
        other => panic!("expected ParseError, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_missing_priority_identifies_record() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.xlsx");

    let err = convert(
        &test_data("missing_priority.json"),
        &output,
        &ExportOptions::default(),
    )
    .unwrap_err();

    match err {
        ConvertError::MissingField { index, field } => {
            assert_eq!(index, 1);
            assert_eq!(field, "priority");
        }
        other => panic!("expected MissingFieldError, got {:?}", other),
    }
    assert!(!output.exists(), "no partial workbook on bad input");
}

#[test]
fn test_bad_timestamp_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("never.xlsx");

    let err = convert(&test_data("bad_date.json"), &output, &ExportOptions::default())
        .unwrap_err();

    assert_eq!(err.kind(), "FormatError");
    assert!(err.to_string().contains("14/12/2017"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = convert(
        &temp_dir.path().join("absent.json"),
        &temp_dir.path().join("out.xlsx"),
        &ExportOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "ReadError");
}

#[test]
fn test_unwritable_output_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("no_such_dir").join("out.xlsx");

    let err = convert(&test_data("issues.json"), &output, &ExportOptions::default())
        .unwrap_err();
    match err {
        ConvertError::Write { path, .. } => assert_eq!(path, output),
        other => panic!("expected WriteError, got {:?}", other),
    }
}
