//! Plain-text rendering of a job report for terminals.

use leadgrid_classify::JobReport;
use unicode_width::UnicodeWidthStr;

/// Pad a string to `width` display columns (CJK and accented names stay aligned).
fn pad_right(s: &str, width: usize) -> String {
    let sw = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(sw)))
}

/// Render rows as a left-aligned table with a dashed rule under the header.
fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(c, *w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(header.iter().map(|h| h.to_string()).collect()));
    out.push('\n');
    out.push_str(&line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.clone()));
        out.push('\n');
    }
    out
}

pub fn render_text(report: &JobReport) -> String {
    let mut out = String::new();

    for section in [&report.averaged, &report.uniform] {
        out.push_str(&section.title);
        out.push('\n');
        if section.rows.is_empty() {
            out.push_str("(none)\n\n");
            continue;
        }
        let rows: Vec<Vec<String>> = section
            .rows
            .iter()
            .map(|s| {
                vec![
                    s.component.clone(),
                    s.count.to_string(),
                    format!("{:.2}", s.positive_percent),
                    format!("{:.2}", s.negative_percent),
                    s.lead_content.to_string(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["Component", "Count", "Positive %", "Negative %", "Lead Content"],
            &rows,
        ));
        out.push('\n');
    }

    out.push_str(&report.conflicting.title);
    out.push('\n');
    if report.conflicting.rows.is_empty() {
        out.push_str("(none)\n");
    } else {
        let rows: Vec<Vec<String>> = report
            .conflicting
            .rows
            .iter()
            .map(|s| {
                vec![
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
                ]
            })
            .collect();
        out.push_str(&table(
            &[
                "Reading", "Room", "Room Type", "Floor", "Component", "Side", "Substrate",
                "Color", "Condition", "PbC", "Result",
            ],
            &rows,
        ));
    }

    out
}
