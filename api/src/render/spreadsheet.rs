//! Spreadsheet renderer
//!
//! Writes the two-row person record (header + data) into an in-memory
//! `.xlsx` workbook.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::entities::Age;

/// Download name for the exported workbook
pub const SPREADSHEET_FILENAME: &str = "datos_usuario.xlsx";

/// MIME type of Office Open XML workbooks
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const SPREADSHEET_SHEET_NAME: &str = "Sheet";

pub const SPREADSHEET_HEADER: [&str; 3] = ["Nombre", "Apellido", "Edad"];

/// Render a single-sheet workbook with the header row and one data row.
///
/// The age is written as a numeric cell. No styling, no formulas.
pub fn render_spreadsheet(name: &str, surname: &str, age: Age) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SPREADSHEET_SHEET_NAME)?;

    for (col, title) in (0u16..).zip(SPREADSHEET_HEADER) {
        worksheet.write_string(0, col, title)?;
    }

    worksheet.write_string(1, 0, name)?;
    worksheet.write_string(1, 1, surname)?;
    worksheet.write_number(1, 2, age.years())?;

    workbook.save_to_buffer()
}
