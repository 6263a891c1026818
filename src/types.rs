use crate::validate::ValidationReport;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A surveyed point after normalization.
///
/// `id` is the zero-based row index in the raw input, kept through every later
/// stage so that any output point can be traced back to its source row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    pub id: usize,
    pub name: String,
    pub easting: f64,
    pub northing: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SurveyPoint {
    pub fn new(id: usize, name: impl Into<String>, easting: f64, northing: f64) -> Self {
        Self {
            id,
            name: name.into(),
            easting,
            northing,
            code: None,
            description: None,
        }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.easting, self.northing)
    }

    /// Planar Euclidean distance in metres.
    pub fn distance_to(&self, other: &SurveyPoint) -> f64 {
        nalgebra::distance(&self.position(), &other.position())
    }
}

/// A point decorated with its 1-based position along the selected boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequencedPoint {
    pub sequence_number: usize,
    #[serde(flatten)]
    pub point: SurveyPoint,
}

impl SequencedPoint {
    pub fn sequence(points: Vec<SurveyPoint>) -> Vec<SequencedPoint> {
        points
            .into_iter()
            .enumerate()
            .map(|(idx, point)| SequencedPoint {
                sequence_number: idx + 1,
                point,
            })
            .collect()
    }
}

/// Axis-aligned extent of a point set in easting/northing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_easting: f64,
    pub max_easting: f64,
    pub min_northing: f64,
    pub max_northing: f64,
}

impl BoundingBox {
    pub fn around(point: &SurveyPoint) -> Self {
        Self {
            min_easting: point.easting,
            max_easting: point.easting,
            min_northing: point.northing,
            max_northing: point.northing,
        }
    }

    pub fn include(&mut self, point: &SurveyPoint) {
        self.min_easting = self.min_easting.min(point.easting);
        self.max_easting = self.max_easting.max(point.easting);
        self.min_northing = self.min_northing.min(point.northing);
        self.max_northing = self.max_northing.max(point.northing);
    }

    pub fn width(&self) -> f64 {
        self.max_easting - self.min_easting
    }

    pub fn height(&self) -> f64 {
        self.max_northing - self.min_northing
    }
}

/// Strategy that produced a polygon's vertex ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMethod {
    Connectivity,
    NumericSort,
    PolarAngle,
    ConvexHull,
    ConcaveHull,
}

impl PolygonMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolygonMethod::Connectivity => "connectivity",
            PolygonMethod::NumericSort => "numeric_sort",
            PolygonMethod::PolarAngle => "polar_angle",
            PolygonMethod::ConvexHull => "convex_hull",
            PolygonMethod::ConcaveHull => "concave_hull",
        }
    }
}

/// Winding direction of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
}

/// Closed boundary ring for one cluster. `points` repeats the first vertex at
/// the end; construct it through [`Polygon::close`] so the ring is always
/// explicitly closed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub cluster_id: usize,
    pub points: Vec<SurveyPoint>,
    pub method: PolygonMethod,
}

impl Polygon {
    /// Close an open ordering into a ring. Returns `None` for fewer than three
    /// vertices.
    pub fn close(
        cluster_id: usize,
        mut open: Vec<SurveyPoint>,
        method: PolygonMethod,
    ) -> Option<Self> {
        if open.len() < 3 {
            return None;
        }
        let first = open[0].clone();
        open.push(first);
        Some(Self {
            cluster_id,
            points: open,
            method,
        })
    }

    /// Vertices without the closing repeat.
    pub fn open_ring(&self) -> &[SurveyPoint] {
        let n = self.points.len();
        if n >= 2 && self.points[0] == self.points[n - 1] {
            &self.points[..n - 1]
        } else {
            &self.points
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.open_ring().len()
    }
}

/// Duplicate bookkeeping: one record per absorbed observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMapping {
    pub cluster_id: usize,
    pub kept_point: SurveyPoint,
    pub duplicate_point: SurveyPoint,
    pub dx: f64,
    pub dy: f64,
}

/// Per-cluster summary entry of the result bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub number_of_points: usize,
    pub bounding_box: BoundingBox,
}

/// Structured output handed to export collaborators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryResult {
    pub all_points: Vec<SurveyPoint>,
    pub duplicates_mapping: Vec<DuplicateMapping>,
    pub clusters_summary: Vec<ClusterSummary>,
    pub polylines: Vec<crate::polyline::Polyline>,
    pub polygons: Vec<Polygon>,
    pub validation_report: Vec<ValidationReport>,
    pub selected_boundary: Vec<SequencedPoint>,
}

impl BoundaryResult {
    /// `true` when no usable point survived normalization; callers should
    /// surface "insufficient data" in that case.
    pub fn is_empty(&self) -> bool {
        self.all_points.is_empty()
    }

    /// Report attached to the polygon of `cluster_id`, if any.
    pub fn report_for(&self, cluster_id: usize) -> Option<&ValidationReport> {
        self.validation_report
            .iter()
            .find(|r| r.cluster_id == cluster_id)
    }
}
