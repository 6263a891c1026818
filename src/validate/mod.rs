//! Polygon validation.
//!
//! Area and orientation come from the shoelace sum over the open ring
//! (closing repeat excluded); a positive signed sum is counterclockwise. A
//! polygon is invalid when any issue is recorded.

use crate::geometry::{centroid, has_self_intersection, signed_area};
use crate::types::{Orientation, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};

pub const ISSUE_AREA_TOO_SMALL: &str = "Area too small";
pub const ISSUE_SELF_INTERSECTS: &str = "Polygon self-intersects";
pub const ISSUE_TOO_FEW_VERTICES: &str = "Too few vertices";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub cluster_id: usize,
    pub valid: bool,
    pub issues: Vec<String>,
    /// Absolute area in m².
    pub area: f64,
    pub orientation: Orientation,
    pub vertex_count: usize,
    /// Sum of `edge_lengths` in m.
    pub perimeter: f64,
    /// One length per ring edge in ring order, closing edge last.
    pub edge_lengths: Vec<f64>,
    /// Area centroid (vertex mean for degenerate rings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f64; 2]>,
}

/// Validate `polygon` against the minimum area `min_area_m2`.
pub fn validate(polygon: &Polygon, min_area_m2: f64) -> ValidationReport {
    let ring = polygon.open_ring();
    let signed = signed_area(ring);
    let area = signed.abs();
    let orientation = if signed > 0.0 {
        Orientation::Counterclockwise
    } else {
        Orientation::Clockwise
    };
    let edge_lengths: Vec<f64> = (0..ring.len())
        .map(|i| ring[i].distance_to(&ring[(i + 1) % ring.len()]))
        .collect();
    let perimeter = edge_lengths.iter().sum();

    let mut issues = Vec::new();
    if area < min_area_m2 {
        issues.push(ISSUE_AREA_TOO_SMALL.to_owned());
    }
    if has_self_intersection(ring) {
        issues.push(ISSUE_SELF_INTERSECTS.to_owned());
    }
    if ring.len() < 3 {
        issues.push(ISSUE_TOO_FEW_VERTICES.to_owned());
    }

    let report = ValidationReport {
        cluster_id: polygon.cluster_id,
        valid: issues.is_empty(),
        issues,
        area,
        orientation,
        vertex_count: ring.len(),
        perimeter,
        edge_lengths,
        centroid: centroid(ring).map(|c| [c.x, c.y]),
    };
    debug!(
        "validate: cluster {} area={:.3} {:?} valid={}",
        report.cluster_id, report.area, report.orientation, report.valid
    );
    report
}
