use crate::dates::format_date_added;
use crate::error::{ConvertError, ConvertResult};

//==============================================================================
// Input Records
//==============================================================================

/// One ticket from the tracker export, with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub title: String,
    pub content: String,
    pub created_on: String,
    pub kind: String,
    pub priority: String,
    pub status: String,
}

//==============================================================================
// Output Table
//==============================================================================

/// Spreadsheet columns, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Title,
    Description,
    DateAdded,
    Kind,
    Priority,
    Status,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::Description,
        Column::DateAdded,
        Column::Kind,
        Column::Priority,
        Column::Status,
    ];

    /// Header cell text
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Description => "Description",
            Column::DateAdded => "Date added",
            Column::Kind => "Kind",
            Column::Priority => "Priority",
            Column::Status => "Status",
        }
    }

    /// Zero-based worksheet column index
    pub fn index(self) -> u16 {
        self as u16
    }

    /// Free-text columns are left aligned; the categorical ones are centered.
    pub fn is_free_text(self) -> bool {
        matches!(self, Column::Title | Column::Description)
    }
}

/// A single output row, already in its final cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    pub title: String,
    pub description: String,
    pub date_added: String,
    pub kind: String,
    pub priority: String,
    pub status: String,
}

impl IssueRow {
    /// Map an issue into its row. `index` is the record position, used for errors.
    pub fn from_issue(index: usize, issue: &Issue) -> ConvertResult<Self> {
        let date_added =
            format_date_added(&issue.created_on).map_err(|source| ConvertError::Format {
                index,
                value: issue.created_on.clone(),
                source,
            })?;

        Ok(Self {
            title: issue.title.clone(),
            description: issue.content.clone(),
            date_added,
            kind: issue.kind.clone(),
            priority: issue.priority.clone(),
            status: issue.status.clone(),
        })
    }

    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Title => &self.title,
            Column::Description => &self.description,
            Column::DateAdded => &self.date_added,
            Column::Kind => &self.kind,
            Column::Priority => &self.priority,
            Column::Status => &self.status,
        }
    }
}

/// All rows of the sheet, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTable {
    rows: Vec<IssueRow>,
}

impl IssueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from parsed issues, stopping at the first bad record.
    pub fn from_issues(issues: &[Issue]) -> ConvertResult<Self> {
        let rows = issues
            .iter()
            .enumerate()
            .map(|(index, issue)| IssueRow::from_issue(index, issue))
            .collect::<ConvertResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn push(&mut self, row: IssueRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[IssueRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
