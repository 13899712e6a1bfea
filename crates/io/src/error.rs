use std::fmt;

#[derive(Debug)]
pub enum IoError {
    /// File could not be opened or read.
    Open { path: String, message: String },
    /// Delimited text could not be parsed.
    Csv(String),
    /// Excel-family workbook could not be opened or read.
    Workbook(String),
    /// Requested sheet does not exist in the workbook.
    SheetNotFound { sheet: String, available: Vec<String> },
    /// Workbook has no sheets at all.
    NoSheets,
    /// File extension is not a supported table format.
    UnsupportedFormat(String),
    /// Report could not be written.
    Write(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Csv(msg) => write!(f, "CSV parse error: {msg}"),
            Self::Workbook(msg) => write!(f, "workbook error: {msg}"),
            Self::SheetNotFound { sheet, available } => write!(
                f,
                "sheet '{sheet}' not found (available: {})",
                available.join(", ")
            ),
            Self::NoSheets => write!(f, "workbook contains no sheets"),
            Self::UnsupportedFormat(ext) => write!(
                f,
                "unsupported file format '{ext}' (expected csv, tsv, txt, xlsx, xlsm, xls, xlsb or ods)"
            ),
            Self::Write(msg) => write!(f, "cannot write report: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}
