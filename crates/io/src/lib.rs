// File I/O: inspection exports in, CSV reports out

pub mod csv;
pub mod error;
pub mod report;
pub mod xlsx;

use std::path::Path;

pub use error::IoError;

/// Table formats accepted as inspection exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Tsv,
    Workbook,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(Self::Delimited),
            "tsv" => Ok(Self::Tsv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Workbook),
            _ => Err(IoError::UnsupportedFormat(ext)),
        }
    }
}

/// Read a file's first (or named) sheet as rows of cell text, header first.
/// `sheet` only applies to workbooks.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>, IoError> {
    let rows = match TableFormat::from_path(path)? {
        TableFormat::Delimited => csv::import(path)?,
        TableFormat::Tsv => csv::import_tsv(path)?,
        TableFormat::Workbook => xlsx::import(path, sheet)?,
    };
    log::debug!("{}: read {} row(s)", path.display(), rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a.CSV")).unwrap(), TableFormat::Delimited);
        assert_eq!(TableFormat::from_path(Path::new("a.tsv")).unwrap(), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path(Path::new("a.xlsx")).unwrap(), TableFormat::Workbook);
        assert_eq!(TableFormat::from_path(Path::new("a.ods")).unwrap(), TableFormat::Workbook);
        let err = TableFormat::from_path(Path::new("a.pdf")).unwrap_err();
        assert!(err.to_string().contains("'pdf'"));
        assert!(TableFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn read_table_feeds_ingest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("units.csv");
        fs::write(
            &path,
            "Reading,Component,PbC,Result\n1,Door Jamb,0.2,Neg\n2,Door Jamb,1.4,Pos\n",
        )
        .unwrap();

        let rows = read_table(&path, None).unwrap();
        let shots = leadgrid_classify::ingest_rows(&rows);
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[1].measurement, 1.4);
    }
}
