//! Density clustering of unique points into spatially separated groups.
//!
//! Region growing over the "within `eps`" relation: a seed collects every
//! point reachable through a chain of neighbours no farther apart than `eps`
//! (inclusive). Every point lands in exactly one cluster, isolated points form
//! singleton clusters, and there is no minimum cluster size. Cluster ids are
//! assigned 0, 1, 2, … in the order seeds are discovered while scanning the
//! input, and members are reported in input order.
//!
//! Complexity
//! - Neighbour search is a linear scan, O(n²) overall. Survey jobs are small
//!   enough that a spatial index has not been needed.

mod accumulator;

use crate::types::{BoundingBox, ClusterSummary, SurveyPoint};
use accumulator::ClusterAccumulator;
use log::{debug, trace};
use serde::Serialize;

/// Default linkage distance in metres.
pub const DEFAULT_EPS_M: f64 = 25.0;

/// One spatially connected group of unique points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpatialCluster {
    pub id: usize,
    pub points: Vec<SurveyPoint>,
    pub bounding_box: BoundingBox,
    /// Mean easting/northing of the members.
    pub mean: [f64; 2],
}

impl SpatialCluster {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            cluster_id: self.id,
            number_of_points: self.points.len(),
            bounding_box: self.bounding_box,
        }
    }
}

/// Partition `points` into clusters with linkage distance `eps`.
pub fn cluster(points: &[SurveyPoint], eps: f64) -> Vec<SpatialCluster> {
    let eps = eps.max(0.0);
    let mut assigned = vec![false; points.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut region = ClusterAccumulator::with_capacity(points.len().min(64));
    let mut clusters = Vec::new();

    for seed in 0..points.len() {
        if assigned[seed] {
            continue;
        }
        region.reset();
        assigned[seed] = true;
        stack.push(seed);
        while let Some(cur) = stack.pop() {
            region.push(cur, &points[cur]);
            for (j, other) in points.iter().enumerate() {
                if !assigned[j] && points[cur].distance_to(other) <= eps {
                    assigned[j] = true;
                    stack.push(j);
                }
            }
        }

        let Some(bounding_box) = region.bbox else {
            continue;
        };
        let (me, mn) = region.mean();
        let members: Vec<SurveyPoint> = region
            .sorted_indices()
            .into_iter()
            .map(|i| points[i].clone())
            .collect();
        trace!(
            "cluster {}: {} points, extent {:.2} x {:.2} m",
            clusters.len(),
            region.len(),
            bounding_box.width(),
            bounding_box.height()
        );
        clusters.push(SpatialCluster {
            id: clusters.len(),
            points: members,
            bounding_box,
            mean: [me, mn],
        });
    }

    debug!(
        "cluster: {} points → {} clusters (eps={})",
        points.len(),
        clusters.len(),
        eps
    );
    clusters
}

#[cfg(test)]
mod tests;
