//! Write-time settings for the issue sheet

/// Which data rows receive conditional coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatRange {
    /// Every written data row.
    #[default]
    Written,
    /// Worksheet rows 2-12 only, as older exports were formatted.
    Legacy,
}

impl FormatRange {
    /// First and last worksheet rows (1-indexed) colored by [`FormatRange::Legacy`].
    pub const LEGACY_ROWS: (u32, u32) = (2, 12);

    /// Whether the data row at zero-based `row_idx` gets colored.
    pub fn covers(self, row_idx: usize) -> bool {
        match self {
            FormatRange::Written => true,
            FormatRange::Legacy => {
                // data row 0 sits on worksheet row 2, below the header
                let excel_row = row_idx as u64 + 2;
                let (first, last) = Self::LEGACY_ROWS;
                (first as u64..=last as u64).contains(&excel_row)
            }
        }
    }
}

/// Options for [`crate::excel::IssueExporter`], passed explicitly to every write.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub zoom: u16,
    pub column_width: f64,
    pub format_range: FormatRange,
    /// Style the header row. When false, headers are plain cells.
    pub header_style: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            zoom: 120,
            column_width: 40.0,
            format_range: FormatRange::Written,
            header_style: true,
        }
    }
}
