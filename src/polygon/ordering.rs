//! Vertex ordering strategies, tried in sequence by the constructor.

use crate::angle::heading;
use crate::geometry::vertex_mean;
use crate::graph::{trace_boundary, GraphOptions, TraceFailure};
use crate::polyline::{numeric_suffix, Polyline};
use crate::types::{PolygonMethod, SurveyPoint};

/// What an ordering strategy may look at.
pub struct OrderingInput<'a> {
    pub points: &'a [SurveyPoint],
    pub polylines: &'a [Polyline],
    pub graph: &'a GraphOptions,
}

/// A strategy either orders the points or says why it does not apply.
pub type OrderingFn = fn(&OrderingInput<'_>) -> Result<Vec<SurveyPoint>, String>;

/// Ordering chain in priority order. The first strategy that applies wins.
pub const ORDERING_STRATEGIES: &[(PolygonMethod, OrderingFn)] = &[
    (PolygonMethod::Connectivity, by_connectivity),
    (PolygonMethod::NumericSort, by_numeric_suffix),
    (PolygonMethod::PolarAngle, by_polar_angle),
];

/// Longest traced path through the cluster's polylines.
pub fn by_connectivity(input: &OrderingInput<'_>) -> Result<Vec<SurveyPoint>, String> {
    match trace_boundary(input.points, input.polylines, input.graph) {
        Ok(trace) => Ok(trace.points),
        Err(TraceFailure::TooFewPolylines { relevant }) => {
            Err(format!("{relevant} polylines on the cluster, need 2"))
        }
        Err(TraceFailure::PathTooShort { nodes }) => {
            Err(format!("longest path has {nodes} points"))
        }
    }
}

/// Ascending trailing number of each name; applies only when every point has
/// one. Equal numbers keep input order.
pub fn by_numeric_suffix(input: &OrderingInput<'_>) -> Result<Vec<SurveyPoint>, String> {
    let mut keyed = Vec::with_capacity(input.points.len());
    for p in input.points {
        let Some(n) = numeric_suffix(&p.name) else {
            return Err(format!("'{}' has no numeric suffix", p.name));
        };
        keyed.push((n, p));
    }
    keyed.sort_by_key(|(n, _)| *n);
    Ok(keyed.into_iter().map(|(_, p)| p.clone()).collect())
}

/// Counterclockwise sweep around the vertex mean, starting from east.
pub fn by_polar_angle(input: &OrderingInput<'_>) -> Result<Vec<SurveyPoint>, String> {
    let center = vertex_mean(input.points).ok_or_else(|| "no points".to_owned())?;
    let mut keyed: Vec<(f64, &SurveyPoint)> = input
        .points
        .iter()
        .map(|p| (heading(&(p.position() - center)), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, p)| p.clone()).collect())
}
