//! Row ingestion: header-alias resolution and tolerant per-row parsing.
//!
//! A table is a header row followed by data rows of cell text. Header names
//! vary between inspection exports, so each canonical field accepts a list
//! of aliases. Rows that cannot be extracted are dropped, with the reason
//! logged at debug level; unparsable numbers become zero.

use crate::model::{component_key, Shot};

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShotField {
    Reading,
    Component,
    Side,
    Color,
    Substrate,
    Condition,
    RoomNumber,
    RoomType,
    Floor,
    Measurement,
    Result,
}

impl ShotField {
    pub const ALL: [ShotField; 11] = [
        ShotField::Reading,
        ShotField::Component,
        ShotField::Side,
        ShotField::Color,
        ShotField::Substrate,
        ShotField::Condition,
        ShotField::RoomNumber,
        ShotField::RoomType,
        ShotField::Floor,
        ShotField::Measurement,
        ShotField::Result,
    ];

    /// Accepted header names, lower-case. "subtrate" is a misspelling found
    /// in real device exports.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Reading => &["reading", "shot #", "shot"],
            Self::Component => &["component"],
            Self::Side => &["side"],
            Self::Color => &["color", "colour"],
            Self::Substrate => &["substrate", "subtrate"],
            Self::Condition => &["condition"],
            Self::RoomNumber => &["room number", "room #", "room no"],
            Self::RoomType => &["room type", "room name"],
            Self::Floor => &["floor"],
            Self::Measurement => &["pbc", "pb", "lead", "pb mg/cm2"],
            Self::Result => &["result", "results"],
        }
    }

    /// Rows are skipped when a required field has no column.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Reading | Self::Component | Self::Measurement | Self::Result
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ShotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "reading"),
            Self::Component => write!(f, "component"),
            Self::Side => write!(f, "side"),
            Self::Color => write!(f, "color"),
            Self::Substrate => write!(f, "substrate"),
            Self::Condition => write!(f, "condition"),
            Self::RoomNumber => write!(f, "room_number"),
            Self::RoomType => write!(f, "room_type"),
            Self::Floor => write!(f, "floor"),
            Self::Measurement => write!(f, "measurement"),
            Self::Result => write!(f, "result"),
        }
    }
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Column position of each canonical field within one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; 11],
}

impl ColumnMap {
    /// Scan the header row left to right. When several header cells alias
    /// the same field, the leftmost one wins.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Self {
        let mut map = ColumnMap::default();
        for (idx, cell) in header.iter().enumerate() {
            let name = cell.as_ref().trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            if let Some(field) = ShotField::ALL
                .iter()
                .copied()
                .find(|f| f.aliases().contains(&name.as_str()))
            {
                let slot = &mut map.columns[field.index()];
                if slot.is_none() {
                    *slot = Some(idx);
                }
            }
        }
        map
    }

    pub fn get(&self, field: ShotField) -> Option<usize> {
        self.columns[field.index()]
    }

    /// Required fields with no matching header.
    pub fn missing_required(&self) -> Vec<ShotField> {
        ShotField::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).is_none())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Why a data row was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    /// The header has no column for a required field.
    MissingColumn(ShotField),
    /// The row is shorter than the column resolved for a field.
    ShortRow { field: ShotField, column: usize },
}

impl std::fmt::Display for RowSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(field) => write!(f, "no {field} column in header"),
            Self::ShortRow { field, column } => {
                write!(f, "row ends before {field} (column {})", column + 1)
            }
        }
    }
}

/// Extract one shot from a data row.
pub fn parse_row<S: AsRef<str>>(row: &[S], columns: &ColumnMap) -> Result<Shot, RowSkip> {
    let text = |field: ShotField| -> Result<&str, RowSkip> {
        match columns.get(field) {
            Some(column) => row
                .get(column)
                .map(|c| c.as_ref())
                .ok_or(RowSkip::ShortRow { field, column }),
            None if field.is_required() => Err(RowSkip::MissingColumn(field)),
            None => Ok(""),
        }
    };

    let component_raw = text(ShotField::Component)?.to_string();

    Ok(Shot {
        reading: parse_reading(text(ShotField::Reading)?),
        component_key: component_key(&component_raw),
        component_raw,
        measurement: parse_measurement(text(ShotField::Measurement)?),
        result_text: text(ShotField::Result)?.to_string(),
        side: text(ShotField::Side)?.to_string(),
        color: text(ShotField::Color)?.to_string(),
        substrate: text(ShotField::Substrate)?.to_string(),
        condition: text(ShotField::Condition)?.to_string(),
        room_number: text(ShotField::RoomNumber)?.to_string(),
        room_type: text(ShotField::RoomType)?.to_string(),
        floor: text(ShotField::Floor)?.to_string(),
    })
}

/// Convert one file's rows (header first) into shots, in row order.
///
/// Rows that fail extraction are omitted. An empty table yields no shots.
pub fn ingest_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<Shot> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    let columns = ColumnMap::resolve(header);
    let missing = columns.missing_required();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
        log::warn!(
            "header has no column for {}; all {} data row(s) will be skipped",
            names.join(", "),
            data.len()
        );
    }
    log::debug!("resolved columns: {columns:?}");

    let mut shots = Vec::with_capacity(data.len());
    for (i, row) in data.iter().enumerate() {
        match parse_row(row, &columns) {
            Ok(shot) => shots.push(shot),
            // Data rows start on line 2
            Err(skip) => log::debug!("skipping row {}: {skip}", i + 2),
        }
    }

    log::debug!("ingested {} shot(s) from {} data row(s)", shots.len(), data.len());
    shots
}

// ---------------------------------------------------------------------------
// Numeric cells
// ---------------------------------------------------------------------------

/// Integer cell text; integral floats such as "12.0" are accepted.
/// Anything else is 0.
///
/// Readings in workbook exports are numeric cells, which are stored as
/// floats, and some instrument software writes the shot counter with a
/// trailing ".0" when it saves CSV.
pub fn parse_reading(text: &str) -> i64 {
    let t = text.trim();
    if let Ok(n) = t.parse::<i64>() {
        return n;
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => f as i64,
        _ => 0,
    }
}

/// Float cell text with '.' as the decimal separator. NaN, infinities and
/// anything unparsable become 0.
pub fn parse_measurement(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn resolves_aliases_case_insensitive() {
        let header = ["Shot #", " COMPONENT ", "Subtrate", "Pb mg/cm2", "Results", "Room #"];
        let map = ColumnMap::resolve(&header);
        assert_eq!(map.get(ShotField::Reading), Some(0));
        assert_eq!(map.get(ShotField::Component), Some(1));
        assert_eq!(map.get(ShotField::Substrate), Some(2));
        assert_eq!(map.get(ShotField::Measurement), Some(3));
        assert_eq!(map.get(ShotField::Result), Some(4));
        assert_eq!(map.get(ShotField::RoomNumber), Some(5));
        assert_eq!(map.get(ShotField::Floor), None);
        assert!(map.missing_required().is_empty());
    }

    #[test]
    fn leftmost_alias_column_wins() {
        let header = ["Lead", "Reading", "PbC", "Component", "Result"];
        let map = ColumnMap::resolve(&header);
        assert_eq!(map.get(ShotField::Measurement), Some(0));
        assert_eq!(map.get(ShotField::Reading), Some(1));
    }

    #[test]
    fn basic_ingest_preserves_row_order() {
        let rows = table(&[
            &["Reading", "Component", "Side", "Color", "Substrate", "Condition", "Room Number", "Room Type", "Floor", "PbC", "Result"],
            &["3", "Door Jamb", "A", "White", "Wood", "Intact", "101", "Bedroom", "1", "0.3", "Neg"],
            &["1", "Window Sill", "B", "Brown", "Wood", "Poor", "101", "Bedroom", "1", "1.4", "Pos"],
        ]);
        let shots = ingest_rows(&rows);
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].reading, 3);
        assert_eq!(shots[0].component_raw, "Door Jamb");
        assert_eq!(shots[0].component_key, "door jamb");
        assert_eq!(shots[0].side, "A");
        assert_eq!(shots[0].room_type, "Bedroom");
        assert_eq!(shots[1].reading, 1);
        assert_eq!(shots[1].measurement, 1.4);
        assert_eq!(shots[1].result_text, "Pos");
    }

    #[test]
    fn unparsable_numbers_default_to_zero() {
        let rows = table(&[
            &["Reading", "Component", "PbC", "Result"],
            &["n/a", "Wall", "high", "Neg"],
            &["12.0", "Wall", "1,2", ""],
            &["", "Wall", "NaN", ""],
        ]);
        let shots = ingest_rows(&rows);
        assert_eq!(shots.len(), 3);
        assert_eq!(shots[0].reading, 0);
        assert_eq!(shots[0].measurement, 0.0);
        assert_eq!(shots[1].reading, 12);
        assert_eq!(shots[1].measurement, 0.0);
        assert_eq!(shots[2].reading, 0);
        assert_eq!(shots[2].measurement, 0.0);
    }

    #[test]
    fn short_row_is_skipped() {
        let rows = table(&[
            &["Reading", "Component", "PbC", "Result"],
            &["1", "Wall", "0.2", "Neg"],
            &["2", "Wall"],
            &["3", "Wall", "0.4", "Neg"],
        ]);
        let shots = ingest_rows(&rows);
        let readings: Vec<i64> = shots.iter().map(|s| s.reading).collect();
        assert_eq!(readings, vec![1, 3]);

        let map = ColumnMap::resolve(&rows[0]);
        let skip = parse_row(&rows[2], &map).unwrap_err();
        assert_eq!(skip, RowSkip::ShortRow { field: ShotField::Measurement, column: 2 });
        assert_eq!(skip.to_string(), "row ends before measurement (column 3)");
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let rows = table(&[
            &["Shot", "Component", "Pb", "Result"],
            &["5", "Baseboard", "0.1", "Neg"],
        ]);
        let shots = ingest_rows(&rows);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].side, "");
        assert_eq!(shots[0].floor, "");
    }

    #[test]
    fn missing_required_column_skips_every_row() {
        let rows = table(&[
            &["Reading", "Component", "Result"],
            &["1", "Wall", "Neg"],
            &["2", "Door", "Pos"],
        ]);
        assert!(ingest_rows(&rows).is_empty());

        let map = ColumnMap::resolve(&rows[0]);
        assert_eq!(map.missing_required(), vec![ShotField::Measurement]);
        assert_eq!(
            parse_row(&rows[1], &map),
            Err(RowSkip::MissingColumn(ShotField::Measurement))
        );
        assert_eq!(
            RowSkip::MissingColumn(ShotField::Measurement).to_string(),
            "no measurement column in header"
        );
    }

    #[test]
    fn empty_table_and_header_only() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(ingest_rows(&empty).is_empty());
        let header_only = table(&[&["Reading", "Component", "PbC", "Result"]]);
        assert!(ingest_rows(&header_only).is_empty());
    }

    #[test]
    fn reading_parse_variants() {
        assert_eq!(parse_reading(" 42 "), 42);
        assert_eq!(parse_reading("-3"), -3);
        assert_eq!(parse_reading("7.0"), 7);
        assert_eq!(parse_reading("7.5"), 0);
        assert_eq!(parse_reading("inf"), 0);
    }

    #[test]
    fn measurement_parse_variants() {
        assert_eq!(parse_measurement("0.7"), 0.7);
        assert_eq!(parse_measurement(" 1.25 "), 1.25);
        assert_eq!(parse_measurement("1e0"), 1.0);
        assert_eq!(parse_measurement("inf"), 0.0);
        assert_eq!(parse_measurement(""), 0.0);
    }
}
