use crate::polygon::{ConstructionOutcome, SkipReason, StrategyAttempt};
use crate::select::SelectionSource;
use crate::types::PolygonMethod;
use serde::Serialize;

/// Duplicate-collapse statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupStage {
    pub elapsed_ms: f64,
    pub tolerance_m: f64,
    pub input_points: usize,
    pub unique_points: usize,
    pub merged: usize,
    /// Groups that absorbed at least one observation.
    pub groups_with_duplicates: usize,
    pub largest_group: usize,
    /// Largest offset between a kept point and one of its duplicates (m).
    pub max_offset_m: f64,
}

/// Clustering statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub elapsed_ms: f64,
    pub eps_m: f64,
    pub clusters: usize,
    pub singletons: usize,
    pub largest_cluster: usize,
}

/// Which point set polylines were read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolylineSource {
    UniquePoints,
    AllPoints,
}

/// Polyline extraction statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStage {
    pub elapsed_ms: f64,
    pub source: PolylineSource,
    pub segments: usize,
    pub chains: usize,
    pub points_on_lines: usize,
}

/// Audit trail of one cluster's polygon construction.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConstruction {
    pub cluster_id: usize,
    pub point_count: usize,
    pub attempts: Vec<StrategyAttempt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PolygonMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl From<&ConstructionOutcome> for ClusterConstruction {
    fn from(outcome: &ConstructionOutcome) -> Self {
        Self {
            cluster_id: outcome.cluster_id,
            point_count: outcome.point_count,
            attempts: outcome.attempts.clone(),
            method: outcome.method(),
            skipped: outcome.skipped,
        }
    }
}

/// Polygon construction over all clusters.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionStage {
    pub elapsed_ms: f64,
    pub polygons: usize,
    pub valid_polygons: usize,
    pub clusters: Vec<ClusterConstruction>,
}

impl ConstructionStage {
    /// Number of clusters whose polygon came from `method`.
    pub fn count_method(&self, method: PolygonMethod) -> usize {
        self.clusters
            .iter()
            .filter(|c| c.method == Some(method))
            .count()
    }
}

/// Outcome of the selector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStage {
    pub elapsed_ms: f64,
    pub source: SelectionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<usize>,
    pub points: usize,
}
