//! Extraction pipeline driving the boundary reconstruction end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use parcel_boundary::{BoundaryExtractor, BoundaryParams};
//! use parcel_boundary::records::RawRow;
//!
//! # fn example(rows: Vec<RawRow>) {
//! let extractor = BoundaryExtractor::new(BoundaryParams::default());
//! let report = extractor.process_with_diagnostics(&rows);
//! for line in report.trace.summary_lines() {
//!     println!("{line}");
//! }
//! # }
//! ```

use super::params::BoundaryParams;
use crate::diagnostics::builders::{
    run_cluster_stage, run_construction_stage, run_dedup_stage, run_polyline_stage,
    run_selection_stage,
};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    ExtractionReport, InputDescriptor, PipelineTrace, PolylineSource, TimingBreakdown,
};
use crate::records::{normalize_rows, RawRow};
use crate::types::{BoundaryResult, SequencedPoint, SurveyPoint};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Stateless boundary extractor. One instance can serve any number of inputs,
/// including concurrently.
#[derive(Clone, Debug, Default)]
pub struct BoundaryExtractor {
    params: BoundaryParams,
}

impl BoundaryExtractor {
    /// Create an extractor with the supplied parameters.
    pub fn new(params: BoundaryParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BoundaryParams {
        &self.params
    }


    /// Run the full pipeline on raw rows.
    pub fn process(&self, rows: &[RawRow]) -> BoundaryResult {
        self.process_with_diagnostics(rows).result
    }

    /// Run the pipeline on already normalized points. Points with non-finite
    /// coordinates are dropped.
    pub fn process_points(&self, points: &[SurveyPoint]) -> BoundaryResult {
        self.process_points_with_diagnostics(points).result
    }

    /// Run the full pipeline and capture the per-stage trace.
    pub fn process_with_diagnostics(&self, rows: &[RawRow]) -> ExtractionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let points = normalize_rows(rows);
        timings.push("normalize", elapsed_ms(start));

        self.run(rows.len(), points, timings, total_start)
    }

    /// Diagnostics variant of [`process_points`](Self::process_points).
    pub fn process_points_with_diagnostics(&self, points: &[SurveyPoint]) -> ExtractionReport {
        let total_start = Instant::now();
        let finite: Vec<SurveyPoint> = points
            .iter()
            .filter(|p| p.easting.is_finite() && p.northing.is_finite())
            .cloned()
            .collect();
        self.run(points.len(), finite, TimingBreakdown::default(), total_start)
    }

    /// Process independent inputs in parallel. The output order matches the
    /// input order.
    pub fn process_batch(&self, inputs: &[Vec<RawRow>]) -> Vec<BoundaryResult> {
        inputs.par_iter().map(|rows| self.process(rows)).collect()
    }

    fn run(
        &self,
        rows: usize,
        all_points: Vec<SurveyPoint>,
        mut timings: TimingBreakdown,
        total_start: Instant,
    ) -> ExtractionReport {
        let params = &self.params;
        let input = InputDescriptor {
            rows,
            accepted: all_points.len(),
            dropped: rows.saturating_sub(all_points.len()),
        };

        let dedup = run_dedup_stage(&all_points, params.duplicate_tolerance_m);
        timings.push("dedup", dedup.stage.elapsed_ms);

        let clustering = run_cluster_stage(&dedup.unique, params.cluster_eps_m);
        timings.push("cluster", clustering.stage.elapsed_ms);

        let polylines = if params.polylines_from_all_points {
            run_polyline_stage(&all_points, PolylineSource::AllPoints)
        } else {
            run_polyline_stage(&dedup.unique, PolylineSource::UniquePoints)
        };
        timings.push("polylines", polylines.stage.elapsed_ms);

        let construction =
            run_construction_stage(&clustering.clusters, &polylines.polylines, params);
        timings.push("construct", construction.stage.elapsed_ms);

        let selection = run_selection_stage(
            &construction.polygons,
            &construction.reports,
            &dedup.unique,
        );
        timings.push("select", selection.stage.elapsed_ms);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "extract: {} points, {} unique, {} clusters, {} polygons, {:.3} ms",
            all_points.len(),
            dedup.unique.len(),
            clustering.clusters.len(),
            construction.polygons.len(),
            timings.total_ms
        );

        let result = BoundaryResult {
            all_points,
            duplicates_mapping: dedup.mapping,
            clusters_summary: clustering.clusters.iter().map(|c| c.summary()).collect(),
            polylines: polylines.polylines,
            polygons: construction.polygons,
            validation_report: construction.reports,
            selected_boundary: SequencedPoint::sequence(selection.selection.points),
        };
        let trace = PipelineTrace {
            input,
            timings,
            dedup: dedup.stage,
            clustering: clustering.stage,
            polylines: polylines.stage,
            construction: construction.stage,
            selection: selection.stage,
        };
        ExtractionReport { result, trace }
    }
}
