//! Excel exporter implementation

use super::options::ExportOptions;
use super::styles::{cell_format, column_format, header_format, resolve_fill};
use crate::error::{ConvertError, ConvertResult};
use crate::types::{Column, IssueTable};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Writes an [`IssueTable`] as a single formatted worksheet
pub struct IssueExporter {
    table: IssueTable,
    options: ExportOptions,
}

impl IssueExporter {
    /// Create a new exporter with default options
    pub fn new(table: IssueTable) -> Self {
        Self::with_options(table, ExportOptions::default())
    }

    pub fn with_options(table: IssueTable, options: ExportOptions) -> Self {
        Self { table, options }
    }

    /// Write the workbook to `output_path`, replacing any existing file
    pub fn export(&self, output_path: &Path) -> ConvertResult<()> {
        let write_error = |message: String| ConvertError::Write {
            path: output_path.to_path_buf(),
            message,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.write_sheet(worksheet).map_err(write_error)?;

        // Save workbook to file
        workbook
            .save(output_path)
            .map_err(|e| write_error(format!("Failed to save Excel file: {}", e)))?;

        debug!(path = %output_path.display(), rows = self.table.len(), "workbook saved");
        Ok(())
    }

    fn write_sheet(&self, worksheet: &mut Worksheet) -> Result<(), String> {
        worksheet
            .set_name(&self.options.sheet_name)
            .map_err(|e| format!("Failed to set worksheet name: {}", e))?;

        self.write_header(worksheet)?;
        self.write_rows(worksheet)?;
        self.apply_column_layout(worksheet)?;

        worksheet.set_zoom(self.options.zoom);
        debug!(zoom = self.options.zoom, "sheet formatting applied");

        Ok(())
    }

    /// Header row (row 0)
    fn write_header(&self, worksheet: &mut Worksheet) -> Result<(), String> {
        let format = header_format();
        for column in Column::ALL {
            let result = if self.options.header_style {
                worksheet.write_string_with_format(0, column.index(), column.header(), &format)
            } else {
                worksheet.write_string(0, column.index(), column.header())
            };
            result.map_err(|e| format!("Failed to write header: {}", e))?;
        }
        Ok(())
    }

    /// Data rows, starting at row 1. Cells outside the format range keep the
    /// column alignment but no fill.
    fn write_rows(&self, worksheet: &mut Worksheet) -> Result<(), String> {
        for (row_idx, row) in self.table.rows().iter().enumerate() {
            let excel_row = u32::try_from(row_idx + 1)
                .map_err(|_| format!("Too many rows for a worksheet: {}", self.table.len()))?;
            let colored = self.options.format_range.covers(row_idx);

            for column in Column::ALL {
                let value = row.cell(column);
                let fill = if colored {
                    resolve_fill(column, value)
                } else {
                    None
                };

                worksheet
                    .write_string_with_format(
                        excel_row,
                        column.index(),
                        value,
                        &cell_format(column, fill),
                    )
                    .map_err(|e| format!("Failed to write row {}: {}", row_idx, e))?;
            }
        }
        Ok(())
    }

    fn apply_column_layout(&self, worksheet: &mut Worksheet) -> Result<(), String> {
        for column in Column::ALL {
            worksheet
                .set_column_width(column.index(), self.options.column_width)
                .map_err(|e| format!("Failed to set column width: {}", e))?;
            worksheet
                .set_column_format(column.index(), &column_format(column))
                .map_err(|e| format!("Failed to set column format: {}", e))?;
        }
        Ok(())
    }
}
