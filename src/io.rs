//! File plumbing for the binaries: survey tables in, JSON reports out.

use crate::error::{Error, Result};
use crate::records::{is_synonym, rows_from_plain_text, RawRow, EASTING_KEYS, NORTHING_KEYS};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Delimiters considered when sniffing a table, in tie-break order.
const DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// Most frequent candidate delimiter on the first line; `,` when none occurs.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or_default();
    let mut best = ',';
    let mut max_count = 0;
    for &delim in &DELIMITERS {
        let count = first_line.matches(delim).count();
        if count > max_count {
            max_count = count;
            best = delim;
        }
    }
    best
}

/// Load survey rows from a delimited table or header-less text file.
pub fn load_survey_rows(path: &Path) -> Result<Vec<RawRow>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_survey_table(&content).map_err(|e| Error::csv(path, e))
}

/// Parse table text. A header row naming both an easting and a northing
/// column selects keyed reading; anything else is read as plain
/// `easting northing [name]` lines.
pub fn parse_survey_table(content: &str) -> std::result::Result<Vec<RawRow>, csv::Error> {
    let content = content.trim_start_matches('\u{feff}');
    let delimiter = detect_delimiter(content);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let has_easting = headers.iter().any(|h| is_synonym(h, EASTING_KEYS));
    let has_northing = headers.iter().any(|h| is_synonym(h, NORTHING_KEYS));
    if !(has_easting && has_northing) {
        debug!("io: no coordinate header, reading plain lines");
        return Ok(rows_from_plain_text(content));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_owned()))
            .collect();
        rows.push(row);
    }
    debug!(
        "io: {} rows, delimiter {:?}, columns {:?}",
        rows.len(),
        delimiter,
        headers
    );
    Ok(rows)
}

pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::json(path, e))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_semicolon_tables() {
        let text = "Point;X;Y;Code\nA;1.0;2.0;FENCE\nB;3.0;4.0;\n";
        assert_eq!(detect_delimiter(text), ';');
        let rows = parse_survey_table(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Point"], "A");
        assert_eq!(rows[1]["Y"], "4.0");
    }

    #[test]
    fn headerless_text_falls_back_to_plain_lines() {
        let text = "100.0,200.0,BM1\n101.0,201.0\n";
        let rows = parse_survey_table(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "BM1");
        assert_eq!(rows[1]["name"], "P2");
    }

    #[test]
    fn short_records_keep_present_columns() {
        let text = "name\teasting\tnorthing\nA\t1\n";
        let rows = parse_survey_table(text).unwrap();
        assert_eq!(rows[0].get("northing"), None);
        assert_eq!(rows[0]["easting"], "1");
    }
}
