// CSV/TSV import of inspection exports

use std::io::Read;
use std::path::Path;

use crate::error::IoError;

pub fn import(path: &Path) -> Result<Vec<Vec<String>>, IoError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

pub fn import_tsv(path: &Path) -> Result<Vec<Vec<String>>, IoError> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, b'\t')
}

/// Pick the field delimiter of an inspection export.
///
/// XRF exports start with the column header, and European-locale installs
/// of the device software switch to `;` because `,` is their decimal mark.
/// A candidate is only considered when it splits the header into several
/// columns. The winner is the candidate whose header width is matched by
/// the most of the first ten non-blank lines, weighted by that width.
/// Ties go to the earlier candidate; comma when nothing splits.
pub fn sniff_delimiter(content: &str) -> u8 {
    const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

    let lines: Vec<&str> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    let mut best = (b',', 0usize);
    for delim in CANDIDATES {
        let widths: Vec<usize> = lines.iter().map(|line| field_count(line, delim)).collect();
        let Some(&header) = widths.first() else { break };
        if header < 2 {
            continue;
        }
        let agreeing = widths.iter().filter(|&&w| w == header).count();
        let score = agreeing * header;
        if score > best.1 {
            best = (delim, score);
        }
    }
    best.0
}

/// Number of fields in one line, honouring quotes.
fn field_count(line: &str, delimiter: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(Result::ok)
        .map_or(1, |record| record.len())
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, IoError> {
    let open_err = |e: std::io::Error| IoError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let mut file = std::fs::File::open(path).map_err(open_err)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(open_err)?;

    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            // Device software on Windows exports cp1252
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    // Excel adds a BOM that would otherwise stick to the first header name
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Parse delimited text into rows of cells. Ragged rows are kept as-is;
/// the header row is not treated specially.
pub fn import_from_string(content: &str, delimiter: u8) -> Result<Vec<Vec<String>>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::Csv(e.to_string()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(rows)
}
