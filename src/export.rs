//! Spreadsheet export of a lead snapshot.
//!
//! Export never reads a store. It projects whatever list the caller already
//! holds, so the file reflects the last fetched snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::domain::lead::{Lead, LeadField};

/// File name of the exported workbook.
pub const EXPORT_FILE_NAME: &str = "leads.xlsx";
/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Leads";
/// Header of the formatted creation date column.
pub const DATE_COLUMN: &str = "Created At";
/// MIME type of the exported workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const COLUMN_WIDTH: f64 = 24.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] XlsxError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a creation instant as a long, human readable date.
pub fn format_long_date(instant: &DateTime<Utc>) -> String {
    instant.format("%A, %B %-d, %Y %H:%M:%S UTC").to_string()
}

/// Tabular projection of leads: business fields plus a formatted date, no id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl LeadSheet {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let headers = LeadField::ALL
            .iter()
            .map(|field| field.label().to_string())
            .chain(std::iter::once(DATE_COLUMN.to_string()))
            .collect();

        let rows = leads
            .iter()
            .map(|lead| {
                LeadField::ALL
                    .iter()
                    .map(|&field| lead.get(field).to_string())
                    .chain(std::iter::once(format_long_date(&lead.created_at)))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Encodes the sheet as an xlsx workbook.
    pub fn to_xlsx(&self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in self.headers.iter().enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
            worksheet.write_string_with_format(0, col, header, &header_format)?;
        }

        for (row, values) in self.rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                worksheet.write_string(row as u32 + 1, col as u16, value)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// Writes the workbook as [`EXPORT_FILE_NAME`] inside `dir`.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let bytes = self.to_xlsx()?;
        fs::create_dir_all(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}
