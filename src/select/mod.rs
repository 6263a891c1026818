//! Choice of the boundary presented to the user.
//!
//! Preference: the valid polygon with the largest area, then the polygon with
//! the most vertices regardless of validity, then every unique point sorted
//! by name. Earlier polygons win ties. The chosen ring is returned open.

use crate::types::{Polygon, SurveyPoint};
use crate::validate::ValidationReport;
use log::debug;
use serde::Serialize;

/// Which rule picked the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    LargestValidPolygon,
    MostVerticesPolygon,
    SortedPoints,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub source: SelectionSource,
    /// Cluster of the chosen polygon, `None` for the point-list fallback.
    pub cluster_id: Option<usize>,
    pub points: Vec<SurveyPoint>,
}

/// Pick the best boundary. `reports` are matched to polygons by
/// `cluster_id`.
pub fn select(
    polygons: &[Polygon],
    reports: &[ValidationReport],
    unique_points: &[SurveyPoint],
) -> Selection {
    let report_of = |p: &Polygon| reports.iter().find(|r| r.cluster_id == p.cluster_id);

    let mut best_valid: Option<(&Polygon, f64)> = None;
    for polygon in polygons {
        let Some(report) = report_of(polygon).filter(|r| r.valid) else {
            continue;
        };
        if best_valid.map_or(true, |(_, area)| report.area > area) {
            best_valid = Some((polygon, report.area));
        }
    }
    if let Some((polygon, area)) = best_valid {
        debug!(
            "select: cluster {} (valid, area {:.3})",
            polygon.cluster_id, area
        );
        return from_polygon(polygon, SelectionSource::LargestValidPolygon);
    }

    let mut most: Option<&Polygon> = None;
    for polygon in polygons {
        if most.map_or(true, |m| polygon.vertex_count() > m.vertex_count()) {
            most = Some(polygon);
        }
    }
    if let Some(polygon) = most {
        debug!(
            "select: no valid polygon, cluster {} has most vertices",
            polygon.cluster_id
        );
        return from_polygon(polygon, SelectionSource::MostVerticesPolygon);
    }

    let mut points = unique_points.to_vec();
    points.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("select: no polygons, {} points by name", points.len());
    Selection {
        source: SelectionSource::SortedPoints,
        cluster_id: None,
        points,
    }
}

fn from_polygon(polygon: &Polygon, source: SelectionSource) -> Selection {
    Selection {
        source,
        cluster_id: Some(polygon.cluster_id),
        points: polygon.open_ring().to_vec(),
    }
}
