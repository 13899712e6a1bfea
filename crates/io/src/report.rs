// CSV export of classified job reports

use std::io::Write;
use std::path::Path;

use leadgrid_classify::model::{ComponentSummary, Shot};
use leadgrid_classify::report::ReportSection;
use leadgrid_classify::JobReport;

use crate::error::IoError;

const SUMMARY_HEADER: [&str; 5] = ["Component", "Count", "Positive %", "Negative %", "Lead Content"];

const SHOT_HEADER: [&str; 11] = [
    "Reading",
    "Room Number",
    "Room Type",
    "Floor",
    "Component",
    "Side",
    "Substrate",
    "Color",
    "Condition",
    "PbC",
    "Result",
];

pub fn export(report: &JobReport, path: &Path) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    export_to_writer(report, file)
}

/// Write the three titled sections, each followed by a blank line.
/// Empty sections still get their title and header.
pub fn export_to_writer<W: Write>(report: &JobReport, mut out: W) -> Result<(), IoError> {
    write_summaries(&mut out, &report.averaged)?;
    write_summaries(&mut out, &report.uniform)?;
    write_shots(&mut out, &report.conflicting)?;

    out.flush().map_err(|e| IoError::Write(e.to_string()))
}

fn section_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().flexible(true).from_writer(out)
}

/// Flush the section's records, then terminate it with an empty line.
/// csv quotes an empty record as `""`, so the newline bypasses it.
fn end_section<W: Write>(writer: csv::Writer<&mut W>) -> Result<(), IoError> {
    let out = writer
        .into_inner()
        .map_err(|e| IoError::Write(e.error().to_string()))?;
    out.write_all(b"\n").map_err(|e| IoError::Write(e.to_string()))
}

fn write_summaries<W: Write>(
    out: &mut W,
    section: &ReportSection<ComponentSummary>,
) -> Result<(), IoError> {
    let err = |e: csv::Error| IoError::Write(e.to_string());
    let mut writer = section_writer(out);

    writer.write_record([section.title.as_str()]).map_err(err)?;
    writer.write_record(SUMMARY_HEADER).map_err(err)?;
    for s in &section.rows {
        writer
            .write_record([
                s.component.clone(),
                s.count.to_string(),
                format!("{:.2}", s.positive_percent),
                format!("{:.2}", s.negative_percent),
                s.lead_content.to_string(),
            ])
            .map_err(err)?;
    }
    end_section(writer)
}

fn write_shots<W: Write>(out: &mut W, section: &ReportSection<Shot>) -> Result<(), IoError> {
    let err = |e: csv::Error| IoError::Write(e.to_string());
    let mut writer = section_writer(out);

    writer.write_record([section.title.as_str()]).map_err(err)?;
    writer.write_record(SHOT_HEADER).map_err(err)?;
    for s in &section.rows {
        writer
            .write_record([
                s.reading.to_string(),
                s.room_number.clone(),
                s.room_type.clone(),
                s.floor.clone(),
                s.component_raw.clone(),
                s.side.clone(),
                s.substrate.clone(),
                s.color.clone(),
                s.condition.clone(),
                s.measurement.to_string(),
                s.result_text.clone(),
            ])
            .map_err(err)?;
    }
    end_section(writer)
}
