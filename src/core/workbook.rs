use crate::domain::model::Row;
use crate::domain::ports::SheetReader;
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Worksheet holding the payroll table in published files.
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

#[derive(Debug, Clone)]
pub struct XlsxSheetReader {
    sheet_name: String,
}

impl XlsxSheetReader {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for XlsxSheetReader {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl SheetReader for XlsxSheetReader {
    fn read_rows(&self, path: &Path, document: &str) -> Result<Vec<Row>> {
        let open_error = |source| EtlError::Open {
            document: document.to_string(),
            source,
        };

        let mut workbook: Xlsx<_> = open_workbook(path).map_err(open_error)?;
        let range = workbook
            .worksheet_range(&self.sheet_name)
            .map_err(open_error)?;

        tracing::debug!(
            "Read sheet {:?} of {} ({:?} cells)",
            self.sheet_name,
            document,
            range.get_size()
        );
        Ok(range_to_rows(&range))
    }
}

/// Cell text by absolute sheet position; calamine ranges start at the first
/// used cell, so leading empty rows and columns are padded back in.
fn range_to_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Row> = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(|cell| cell.to_string()));
        rows.push(cells);
    }
    rows
}
