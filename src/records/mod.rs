//! Record normalization: raw tabular rows → [`SurveyPoint`]s.
//!
//! Field lookup walks an explicit, ranked list of accepted header names per
//! field and takes the first name that some non-blank column matches,
//! ignoring ASCII case. Several columns matching the same name (`EASTING` and
//! `Easting`) must agree on the value, otherwise the field counts as missing.
//! Rows lacking a finite easting/northing or a non-empty name are dropped
//! without error; the input order and the original row index are preserved.

mod plain_text;

pub use plain_text::rows_from_plain_text;

use crate::types::SurveyPoint;
use log::{debug, trace};
use std::collections::HashMap;

/// One raw input row: column name → cell text.
pub type RawRow = HashMap<String, String>;

/// Accepted header names for the point name, in priority order.
pub const NAME_KEYS: &[&str] = &["name", "Name", "point", "id"];
/// Accepted header names for the easting, in priority order.
pub const EASTING_KEYS: &[&str] = &["easting", "Easting", "x", "X", "E", "east"];
/// Accepted header names for the northing, in priority order.
pub const NORTHING_KEYS: &[&str] = &["northing", "Northing", "y", "Y", "N", "north"];
/// Accepted header names for the optional feature code.
pub const CODE_KEYS: &[&str] = &["code", "Code"];
/// Accepted header names for the optional free-text description.
pub const DESCRIPTION_KEYS: &[&str] = &["description", "Description", "desc", "remarks"];

/// Why a row was rejected. Only used for tracing/diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowRejection {
    MissingName,
    MissingEasting,
    MissingNorthing,
}

/// Normalize rows into survey points, dropping unusable rows.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<SurveyPoint> {
    let mut points = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for (idx, row) in rows.iter().enumerate() {
        match normalize_row(idx, row) {
            Ok(point) => points.push(point),
            Err(reason) => {
                dropped += 1;
                trace!("records: row {idx} dropped ({reason:?})");
            }
        }
    }
    debug!(
        "records: {} rows → {} points ({} dropped)",
        rows.len(),
        points.len(),
        dropped
    );
    points
}

/// Normalize a single row with the given source index.
pub fn normalize_row(id: usize, row: &RawRow) -> Result<SurveyPoint, RowRejection> {
    let name = lookup(row, NAME_KEYS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RowRejection::MissingName)?;
    let easting = lookup(row, EASTING_KEYS)
        .and_then(parse_finite)
        .ok_or(RowRejection::MissingEasting)?;
    let northing = lookup(row, NORTHING_KEYS)
        .and_then(parse_finite)
        .ok_or(RowRejection::MissingNorthing)?;

    let optional = |keys: &[&str]| {
        lookup(row, keys)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    Ok(SurveyPoint {
        id,
        name: name.to_owned(),
        easting,
        northing,
        code: optional(CODE_KEYS),
        description: optional(DESCRIPTION_KEYS),
    })
}

/// `true` when `header` names one of the given synonyms (case-insensitive).
pub fn is_synonym(header: &str, keys: &[&str]) -> bool {
    let header = header.trim();
    keys.iter().any(|k| k.eq_ignore_ascii_case(header))
}

fn lookup<'a>(row: &'a RawRow, keys: &[&str]) -> Option<&'a str> {
    // Sorted so the outcome never depends on map iteration order.
    let mut cells: Vec<(&'a String, &'a String)> = row
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    cells.sort();

    for key in keys {
        let mut found: Option<&'a str> = None;
        for &(header, value) in &cells {
            if !header.trim().eq_ignore_ascii_case(key) {
                continue;
            }
            match found {
                None => found = Some(value.as_str()),
                Some(prev) if prev.trim() == value.trim() => {}
                Some(_) => return None,
            }
        }
        if found.is_some() {
            return found;
        }
    }
    None
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
