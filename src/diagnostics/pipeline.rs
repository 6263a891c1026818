use super::{ClusterStage, ConstructionStage, DedupStage, PolylineStage, SelectionStage, TimingBreakdown};
use crate::types::BoundaryResult;
use serde::Serialize;

/// Result produced by
/// [`BoundaryExtractor::process_with_diagnostics`](crate::BoundaryExtractor).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub result: BoundaryResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing every stage of one extraction run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub dedup: DedupStage,
    pub clustering: ClusterStage,
    pub polylines: PolylineStage,
    pub construction: ConstructionStage,
    pub selection: SelectionStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub rows: usize,
    pub accepted: usize,
    pub dropped: usize,
}

impl PipelineTrace {
    /// Human-readable multi-line summary for console output.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "input: {} rows, {} accepted, {} dropped",
                self.input.rows, self.input.accepted, self.input.dropped
            ),
            format!(
                "dedup: {} unique, {} merged (tol {} m, max offset {:.4} m)",
                self.dedup.unique_points,
                self.dedup.merged,
                self.dedup.tolerance_m,
                self.dedup.max_offset_m
            ),
            format!(
                "clusters: {} ({} singletons, largest {}, eps {} m)",
                self.clustering.clusters,
                self.clustering.singletons,
                self.clustering.largest_cluster,
                self.clustering.eps_m
            ),
            format!(
                "polylines: {} segments, {} chains",
                self.polylines.segments, self.polylines.chains
            ),
            format!(
                "polygons: {} built, {} valid",
                self.construction.polygons, self.construction.valid_polygons
            ),
        ];
        for c in &self.construction.clusters {
            let tried: Vec<String> = c
                .attempts
                .iter()
                .map(|a| format!("{}={:?}", a.method.as_str(), a.outcome))
                .collect();
            let method = c.method.map_or("-", |m| m.as_str());
            lines.push(format!(
                "  cluster {}: {} points → {} [{}]",
                c.cluster_id,
                c.point_count,
                method,
                tried.join(", ")
            ));
        }
        lines.push(format!(
            "selection: {:?}, {} points",
            self.selection.source, self.selection.points
        ));
        lines.push(format!("total: {:.3} ms", self.timings.total_ms));
        lines
    }
}
