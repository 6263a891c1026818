//! Polygon construction for one cluster.
//!
//! In [`ExtractionMode::Boundary`] the ordering strategies in
//! [`ORDERING_STRATEGIES`] are tried in priority order and the first one that
//! applies decides the ring. If that ring self-intersects it is discarded and
//! the convex hull is built instead; later strategies are not consulted. In
//! [`ExtractionMode::HullOutline`] the k-nearest-neighbour concave hull is
//! used, with the convex hull when no simple concave ring is found.
//!
//! Every strategy that was looked at is recorded as a [`StrategyAttempt`], so
//! the fallback chain can be audited per cluster.

mod concave;
mod hull;
mod options;
mod ordering;

pub use concave::{concave_hull, ConcaveHull};
pub use hull::convex_hull;
pub use options::ConcaveHullOptions;
pub use ordering::{
    by_connectivity, by_numeric_suffix, by_polar_angle, OrderingFn, OrderingInput,
    ORDERING_STRATEGIES,
};

use crate::extractor::params::{BoundaryParams, ExtractionMode};
use crate::geometry::first_crossing;
use crate::polyline::Polyline;
use crate::types::{Polygon, PolygonMethod, SurveyPoint};
use log::debug;
use serde::Serialize;

/// Result of one strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The ordering was used for the polygon.
    Accepted,
    /// The strategy does not apply to this cluster.
    Unavailable,
    /// The ordering crossed itself and was discarded.
    SelfIntersecting,
    /// The strategy produced fewer than three vertices.
    TooFewPoints,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAttempt {
    pub method: PolygonMethod,
    pub outcome: AttemptOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StrategyAttempt {
    fn new(method: PolygonMethod, outcome: AttemptOutcome, detail: Option<String>) -> Self {
        Self {
            method,
            outcome,
            detail,
        }
    }
}

/// Why a cluster produced no polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer points than `min_polygon_vertices`.
    TooFewPoints,
    /// Every fallback was degenerate (e.g. collinear points).
    Degenerate,
}

/// Polygon (if any) plus the audit trail for one cluster.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionOutcome {
    pub cluster_id: usize,
    pub point_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
    pub attempts: Vec<StrategyAttempt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

impl ConstructionOutcome {
    pub fn method(&self) -> Option<PolygonMethod> {
        self.polygon.as_ref().map(|p| p.method)
    }
}

/// Build the polygon for one cluster's unique points.
pub fn construct(
    cluster_id: usize,
    points: &[SurveyPoint],
    polylines: &[Polyline],
    params: &BoundaryParams,
) -> ConstructionOutcome {
    let mut outcome = ConstructionOutcome {
        cluster_id,
        point_count: points.len(),
        polygon: None,
        attempts: Vec::new(),
        skipped: None,
    };
    if points.len() < params.min_vertices() {
        debug!(
            "polygon: cluster {cluster_id} has {} points, need {}",
            points.len(),
            params.min_vertices()
        );
        outcome.skipped = Some(SkipReason::TooFewPoints);
        return outcome;
    }

    let polygon = match params.mode {
        ExtractionMode::Boundary => {
            order_and_close(cluster_id, points, polylines, params, &mut outcome.attempts)
        }
        ExtractionMode::HullOutline => {
            outline(cluster_id, points, params, &mut outcome.attempts)
        }
    };
    if polygon.is_none() {
        outcome.skipped = Some(SkipReason::Degenerate);
    }
    outcome.polygon = polygon;
    outcome
}

fn order_and_close(
    cluster_id: usize,
    points: &[SurveyPoint],
    polylines: &[Polyline],
    params: &BoundaryParams,
    attempts: &mut Vec<StrategyAttempt>,
) -> Option<Polygon> {
    let input = OrderingInput {
        points,
        polylines,
        graph: &params.graph,
    };
    for (method, strategy) in ORDERING_STRATEGIES {
        let order = match strategy(&input) {
            Ok(order) => order,
            Err(reason) => {
                debug!(
                    "polygon: cluster {cluster_id} {} unavailable ({reason})",
                    method.as_str()
                );
                attempts.push(StrategyAttempt::new(
                    *method,
                    AttemptOutcome::Unavailable,
                    Some(reason),
                ));
                continue;
            }
        };
        if order.len() < 3 {
            attempts.push(StrategyAttempt::new(
                *method,
                AttemptOutcome::TooFewPoints,
                Some(format!("{} points", order.len())),
            ));
            continue;
        }
        if let Some((i, j)) = first_crossing(&order) {
            debug!(
                "polygon: cluster {cluster_id} {} ordering crosses itself (edges {i}, {j}), using convex hull",
                method.as_str()
            );
            attempts.push(StrategyAttempt::new(
                *method,
                AttemptOutcome::SelfIntersecting,
                Some(format!("edges {i} and {j} cross")),
            ));
            return convex_fallback(cluster_id, points, attempts);
        }
        attempts.push(StrategyAttempt::new(*method, AttemptOutcome::Accepted, None));
        return Polygon::close(cluster_id, order, *method);
    }
    convex_fallback(cluster_id, points, attempts)
}

fn outline(
    cluster_id: usize,
    points: &[SurveyPoint],
    params: &BoundaryParams,
    attempts: &mut Vec<StrategyAttempt>,
) -> Option<Polygon> {
    match concave_hull(points, &params.concave) {
        Some(hull) => {
            attempts.push(StrategyAttempt::new(
                PolygonMethod::ConcaveHull,
                AttemptOutcome::Accepted,
                Some(format!("k={}", hull.k)),
            ));
            Polygon::close(cluster_id, hull.ring, PolygonMethod::ConcaveHull)
        }
        None => {
            debug!("polygon: cluster {cluster_id} concave hull failed, using convex hull");
            attempts.push(StrategyAttempt::new(
                PolygonMethod::ConcaveHull,
                AttemptOutcome::Unavailable,
                Some(format!(
                    "no simple ring up to k={}",
                    params.concave.k.max(3) + params.concave.max_retries
                )),
            ));
            convex_fallback(cluster_id, points, attempts)
        }
    }
}

fn convex_fallback(
    cluster_id: usize,
    points: &[SurveyPoint],
    attempts: &mut Vec<StrategyAttempt>,
) -> Option<Polygon> {
    let ring = convex_hull(points);
    if ring.len() < 3 {
        attempts.push(StrategyAttempt::new(
            PolygonMethod::ConvexHull,
            AttemptOutcome::TooFewPoints,
            Some(format!("{} hull points", ring.len())),
        ));
        return None;
    }
    attempts.push(StrategyAttempt::new(
        PolygonMethod::ConvexHull,
        AttemptOutcome::Accepted,
        None,
    ));
    Polygon::close(cluster_id, ring, PolygonMethod::ConvexHull)
}
