//! Loading of tracker JSON exports.

use crate::error::{ConvertError, ConvertResult};
use crate::types::Issue;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Top level of the export. Everything besides `issues` is ignored.
#[derive(Debug, Deserialize)]
struct IssueExport {
    issues: Option<Vec<Value>>,
}

/// Read and validate the export at `path`.
///
/// Returns `Ok(None)` when the document has no `issues` field, or it is `null`.
pub fn parse_export(path: &Path) -> ConvertResult<Option<Vec<Issue>>> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_export_str(&content, path)
}

/// Same as [`parse_export`] for content already in memory; `path` only labels errors.
pub fn parse_export_str(content: &str, path: &Path) -> ConvertResult<Option<Vec<Issue>>> {
    let export: IssueExport = serde_json::from_str(content).map_err(|e| ConvertError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Some(records) = export.issues else {
        return Ok(None);
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let fields = record.as_object().ok_or_else(|| ConvertError::Parse {
                path: path.to_path_buf(),
                message: format!("issues[{}] is not an object", index),
            })?;
            parse_issue(index, fields)
        })
        .collect::<ConvertResult<Vec<_>>>()
        .map(Some)
}

fn parse_issue(index: usize, fields: &Map<String, Value>) -> ConvertResult<Issue> {
    let field = |name: &'static str| -> ConvertResult<String> {
        fields
            .get(name)
            .map(cell_text)
            .ok_or(ConvertError::MissingField { index, field: name })
    };

    Ok(Issue {
        title: field("title")?,
        content: field("content")?,
        created_on: field("created_on")?,
        kind: field("kind")?,
        priority: field("priority")?,
        status: field("status")?,
    })
}

/// Strings pass through untouched, `null` is an empty cell, anything else keeps its JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
