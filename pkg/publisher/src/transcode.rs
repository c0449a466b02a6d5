use anyhow::{Context, Result};
use pkg_types::map::CaseRecord;
use std::path::Path;

/// Read every row of a comma-delimited case file, in file order.
///
/// There is no header handling: a header line is returned as a data row.
/// A blank line is returned as an empty row.
pub fn read_case_records(path: &Path) -> Result<Vec<CaseRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open case file {}", path.display()))?;
    parse_case_rows(&content)
        .with_context(|| format!("Failed to read case file {}", path.display()))
}

/// Parse case rows from CSV text.
pub fn parse_case_rows(content: &str) -> Result<Vec<CaseRecord>> {
    let mut records = Vec::new();
    for line in csv_lines(content) {
        if line.trim_end_matches('\r').is_empty() {
            // The csv reader skips blank lines; keep them as empty rows.
            records.push(CaseRecord::default());
            continue;
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b',')
            .from_reader(line.as_bytes());
        for row in reader.records() {
            let row = row?;
            records.push(CaseRecord::from_fields(
                row.iter().map(str::to_string).collect(),
            ));
        }
    }
    Ok(records)
}

/// Split on newlines that are not inside a quoted field.
fn csv_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, b) in content.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Build the data upload body: fields joined by `", "`, one row per line.
///
/// The service accepts plain CSV; the `", "` separator is kept so uploads
/// stay byte-identical to earlier runs of this worker.
pub fn transcode(records: &[CaseRecord]) -> String {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.fields().join(", "));
        body.push('\n');
    }
    body
}
