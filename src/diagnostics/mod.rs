//! Diagnostics data model exposed by the extractor and the demo binary.
//!
//! `ExtractionReport` is the main entry point, bundling the
//! [`BoundaryResult`](crate::BoundaryResult) with a `PipelineTrace` that
//! records counts, timings and the per-cluster fallback chain of every stage.

pub mod builders;
pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{ExtractionReport, InputDescriptor, PipelineTrace};
pub use stages::{
    ClusterConstruction, ClusterStage, ConstructionStage, DedupStage, PolylineSource,
    PolylineStage, SelectionStage,
};
pub use timing::{StageTiming, TimingBreakdown};
