// Excel import (xlsx, xlsm, xls, xlsb, ods)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};

use crate::error::IoError;

/// Import one sheet as rows of cell text. `sheet` selects by name
/// (case-insensitive); the first sheet is used when omitted.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>, IoError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| IoError::Workbook(format!("failed to open {}: {e}", path.display())))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let sheet_name = select_sheet(&sheet_names, sheet)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IoError::Workbook(format!("failed to read sheet '{sheet_name}': {e}")))?;

    let (height, width) = range.get_size();
    log::debug!(
        "{}: sheet '{}' is {}x{}",
        path.display(),
        sheet_name,
        height,
        width
    );

    // Range starts at the first used cell; header and data stay aligned
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(rows)
}

fn select_sheet(names: &[String], wanted: Option<&str>) -> Result<String, IoError> {
    match wanted {
        Some(wanted) => names
            .iter()
            .find(|n| n.trim().eq_ignore_ascii_case(wanted.trim()))
            .cloned()
            .ok_or_else(|| IoError::SheetNotFound {
                sheet: wanted.to_string(),
                available: names.to_vec(),
            }),
        None => names.first().cloned().ok_or(IoError::NoSheets),
    }
}

/// Render a cell the way it would appear in a CSV export of the sheet.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            // Integers without decimals, so readings stay "12" not "12.0"
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => format!("{}", n),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::Error(e) => format!("#{:?}", e),
        // Serial number; inspection exports only carry dates as descriptive text
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
