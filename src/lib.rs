#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod records;
pub mod types;

// Stage modules – public so tools can run or test a single stage.
pub mod angle;
pub mod cluster;
pub mod dedup;
pub mod geometry;
pub mod graph;
pub mod polygon;
pub mod polyline;
pub mod select;
pub mod validate;

// Binary plumbing.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::extractor::{BoundaryExtractor, BoundaryParams, ExtractionMode, SurveyProfile};
pub use crate::types::{BoundaryResult, Polygon, PolygonMethod, SurveyPoint};

// High-level diagnostics returned by the extractor.
pub use crate::diagnostics::{ExtractionReport, PipelineTrace};

pub use crate::error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use parcel_boundary::prelude::*;
///
/// # fn main() {
/// let points: Vec<SurveyPoint> = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(e, n))| SurveyPoint::new(i, format!("P{}", i + 1), e, n))
///     .collect();
///
/// let extractor = BoundaryExtractor::new(BoundaryParams::default());
/// let result = extractor.process_points(&points);
/// println!("polygons={} area={:.1}", result.polygons.len(), result.validation_report[0].area);
/// # }
/// ```
pub mod prelude {
    pub use crate::records::RawRow;
    pub use crate::{BoundaryExtractor, BoundaryParams, BoundaryResult, SurveyPoint};
}

// --- Stage-level diagnostics API (for tools & advanced users) --------------

pub mod stages {
    // Stage runners / builders.
    pub use crate::diagnostics::builders::{
        run_cluster_stage, run_construction_stage, run_dedup_stage, run_polyline_stage,
        run_selection_stage, ClusterStageOutput, ConstructionStageOutput, DedupStageOutput,
        PolylineStageOutput, SelectionStageOutput,
    };

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        ClusterConstruction, ClusterStage, ConstructionStage, DedupStage, InputDescriptor,
        PolylineSource, PolylineStage, SelectionStage, StageTiming, TimingBreakdown,
    };
}
