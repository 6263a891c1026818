//! Duplicate collapsing of repeated observations.
//!
//! A single greedy pass in input order: each unvisited point seeds a group and
//! absorbs every later unvisited point within `tolerance` of the *seed*. There
//! is no transitive closure, so a chain of points each within tolerance of its
//! neighbour but not of the seed is split over several groups. Clustering
//! (`crate::cluster`) is the transitive counterpart.
//!
//! Each group keeps one canonical point: a name following the line grammar
//! (`<prefix>-L<n>-P<1|2>`) wins over one that does not, then the longer name,
//! then the earlier input position.
//!
//! O(n²) in the number of points.

use crate::polyline::naming::is_line_endpoint_name;
use crate::types::{DuplicateMapping, SurveyPoint};
use log::debug;
use serde::Serialize;

/// Default duplicate radius in metres.
pub const DEFAULT_TOLERANCE_M: f64 = 0.01;

/// A set of near-coincident observations and the point chosen to represent
/// them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub id: usize,
    /// Index into `members` of the kept point.
    pub kept_index: usize,
    /// Seed first, then absorbed points in input order.
    pub members: Vec<SurveyPoint>,
}

impl DuplicateGroup {
    pub fn kept(&self) -> &SurveyPoint {
        &self.members[self.kept_index]
    }

    /// Members other than the kept point.
    pub fn duplicates(&self) -> impl Iterator<Item = &SurveyPoint> {
        self.members
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.kept_index)
            .map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn mapping_records(&self) -> impl Iterator<Item = DuplicateMapping> + '_ {
        let kept = self.kept();
        self.duplicates().map(move |dup| DuplicateMapping {
            cluster_id: self.id,
            kept_point: kept.clone(),
            duplicate_point: dup.clone(),
            dx: dup.easting - kept.easting,
            dy: dup.northing - kept.northing,
        })
    }
}

/// Group near-coincident points. Groups are returned in seed order.
pub fn group_duplicates(points: &[SurveyPoint], tolerance: f64) -> Vec<DuplicateGroup> {
    let tolerance = tolerance.max(0.0);
    let mut visited = vec![false; points.len()];
    let mut groups = Vec::new();

    for seed_idx in 0..points.len() {
        if visited[seed_idx] {
            continue;
        }
        visited[seed_idx] = true;
        let seed = &points[seed_idx];
        let mut members = vec![seed.clone()];
        for j in (seed_idx + 1)..points.len() {
            if !visited[j] && seed.distance_to(&points[j]) <= tolerance {
                visited[j] = true;
                members.push(points[j].clone());
            }
        }
        let kept_index = choose_kept(&members);
        groups.push(DuplicateGroup {
            id: groups.len(),
            kept_index,
            members,
        });
    }
    groups
}

/// Collapse duplicates, returning the kept points (in group order) and one
/// mapping record per absorbed point.
pub fn collapse(points: &[SurveyPoint], tolerance: f64) -> (Vec<SurveyPoint>, Vec<DuplicateMapping>) {
    let groups = group_duplicates(points, tolerance);
    let (unique, mapping) = split_groups(&groups);
    debug!(
        "dedup: {} points → {} unique ({} merged, tol={})",
        points.len(),
        unique.len(),
        mapping.len(),
        tolerance
    );
    (unique, mapping)
}

/// Flatten groups into kept points and mapping records.
pub fn split_groups(groups: &[DuplicateGroup]) -> (Vec<SurveyPoint>, Vec<DuplicateMapping>) {
    let unique = groups.iter().map(|g| g.kept().clone()).collect();
    let mapping = groups.iter().flat_map(DuplicateGroup::mapping_records).collect();
    (unique, mapping)
}

fn choose_kept(members: &[SurveyPoint]) -> usize {
    let mut best = 0usize;
    for (idx, candidate) in members.iter().enumerate().skip(1) {
        if prefer(candidate, &members[best]) {
            best = idx;
        }
    }
    best
}

/// Strict preference: `true` only when `a` beats `b`, so earlier members win
/// ties.
fn prefer(a: &SurveyPoint, b: &SurveyPoint) -> bool {
    let a_line = is_line_endpoint_name(&a.name);
    let b_line = is_line_endpoint_name(&b.name);
    if a_line != b_line {
        return a_line;
    }
    a.name.chars().count() > b.name.chars().count()
}
