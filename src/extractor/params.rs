//! Parameter types configuring the extraction stages.
//!
//! All knobs are grouped in [`BoundaryParams`], which deserializes from JSON
//! with every field optional. Defaults suit parcel-scale surveys in metres.
//! Wider sites mainly need a larger `cluster_eps_m`; see [`SurveyProfile`].

use crate::graph::GraphOptions;
use crate::polygon::ConcaveHullOptions;
use serde::{Deserialize, Serialize};

/// How eligible clusters are outlined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Ordering chain: connectivity, numeric suffix, polar angle, with the
    /// convex hull as repair for self-intersecting orderings.
    #[default]
    Boundary,
    /// Shape-following outline via the concave hull, convex hull on failure.
    HullOutline,
}

/// Caller profiles selecting the cluster linkage distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyProfile {
    /// Single parcels (25 m).
    Parcel,
    /// Construction sites and estates (100 m).
    Site,
    /// Scattered regional control (300 m).
    Regional,
}

impl SurveyProfile {
    pub fn cluster_eps_m(self) -> f64 {
        match self {
            SurveyProfile::Parcel => 25.0,
            SurveyProfile::Site => 100.0,
            SurveyProfile::Regional => 300.0,
        }
    }
}

/// Pipeline-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryParams {
    /// Radius within which observations are treated as the same point (m).
    pub duplicate_tolerance_m: f64,
    /// Linkage distance of the density clusterer (m).
    pub cluster_eps_m: f64,
    /// Clusters with fewer unique points produce no polygon.
    pub min_polygon_vertices: usize,
    /// Polygons below this area are reported as invalid (m²).
    pub min_area_m2: f64,
    pub mode: ExtractionMode,
    /// Extract polylines before duplicate collapse, so corners shared by two
    /// lines keep both endpoints.
    pub polylines_from_all_points: bool,
    pub graph: GraphOptions,
    pub concave: ConcaveHullOptions,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            duplicate_tolerance_m: crate::dedup::DEFAULT_TOLERANCE_M,
            cluster_eps_m: crate::cluster::DEFAULT_EPS_M,
            min_polygon_vertices: 3,
            min_area_m2: 1.0,
            mode: ExtractionMode::default(),
            polylines_from_all_points: false,
            graph: GraphOptions::default(),
            concave: ConcaveHullOptions::default(),
        }
    }
}

impl BoundaryParams {
    /// Defaults with the linkage distance of `profile`.
    pub fn for_profile(profile: SurveyProfile) -> Self {
        Self {
            cluster_eps_m: profile.cluster_eps_m(),
            ..Self::default()
        }
    }

    /// Effective minimum cluster size; a ring needs at least three vertices.
    pub fn min_vertices(&self) -> usize {
        self.min_polygon_vertices.max(3)
    }
}
