use crate::error::{Result, SheetError};
use crate::table::RawRows;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Header label of the exported column.
pub const OUTPUT_HEADER: &str = "Unmatched values";

/// Read the first sheet of a workbook (`.xlsx` or `.xls`) into raw rows.
pub(crate) fn read_rows(path: &Path) -> Result<RawRows> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        return Ok(Vec::new());
    };

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| SheetError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(sheet = %first_sheet, rows = range.height(), "read workbook");

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

/// Render a workbook cell as text, or `None` for an empty cell.
///
/// Numbers that Excel stored as integral floats come back without the
/// fractional part, so an identifier the file shows as `101` loads as
/// `"101"`, not `"101.0"`.
fn cell_text(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::DateTime(dt) => Some(float_text(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(format!("#ERROR: {e:?}")),
    }
}

fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Write `values` to a single-sheet, single-column workbook at `path`,
/// with `OUTPUT_HEADER` in the first row and one value per row below it,
/// in the order given. An existing file is overwritten.
///
/// # Errors
///
/// `SheetError::Write` when the destination cannot be created or written.
pub fn write_column<P: AsRef<Path>>(values: &[String], path: P) -> Result<()> {
    let path = path.as_ref();
    let write_error = |message: String| SheetError::Write {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .write_string(0, 0, OUTPUT_HEADER)
        .map_err(|e| write_error(e.to_string()))?;

    for (i, value) in values.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| write_error("row index overflow".into()))?;
        worksheet
            .write_string(row, 0, value.as_str())
            .map_err(|e| write_error(e.to_string()))?;
    }

    workbook
        .save(path)
        .map_err(|e| write_error(e.to_string()))?;

    Ok(())
}
