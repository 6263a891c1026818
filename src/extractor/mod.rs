//! Boundary extractor orchestrating the reconstruction pipeline.
//!
//! Overview
//! - Normalizes raw rows into survey points, dropping unusable rows.
//! - Collapses repeated observations of the same physical point.
//! - Clusters the unique points into spatially separated groups.
//! - Reads line membership from point names into polylines.
//! - Builds one polygon per eligible cluster through the ordering chain
//!   (connectivity trace, numeric suffix, polar angle) with the convex hull as
//!   self-intersection repair, or outlines clusters with the concave hull.
//! - Validates every polygon and selects the boundary to present.
//!
//! Modules
//! - [`params`] – configuration types used by the extractor and the binaries.
//! - `pipeline` – the [`BoundaryExtractor`] implementation.
//!
//! Every stage is a pure function of its inputs; the extractor holds only its
//! parameters.

pub mod params;
mod pipeline;

pub use params::{BoundaryParams, ExtractionMode, SurveyProfile};
pub use pipeline::BoundaryExtractor;
