//! Property-based tests for the pipeline invariants.
//!
//! - Duplicate collapse conserves points.
//! - Clusters partition the points and are chain-connected within `eps`.
//! - Shoelace area is rotation invariant and flips sign under reversal.
//! - The self-intersection verdict does not depend on traversal direction.
//! - The pipeline is deterministic.

mod common;

use common::synthetic_survey::rows;
use parcel_boundary::cluster::cluster;
use parcel_boundary::dedup::group_duplicates;
use parcel_boundary::geometry::{has_self_intersection, signed_area};
use parcel_boundary::{BoundaryExtractor, SurveyPoint};
use proptest::prelude::*;

/// Coordinates on a coarse lattice so that duplicates and ties occur often.
fn lattice_coordinate() -> impl Strategy<Value = f64> + Clone {
    (0i32..40).prop_map(|v| f64::from(v) * 0.005)
}

fn finite_coordinate() -> impl Strategy<Value = f64> + Clone {
    -500.0f64..500.0
}

fn survey_points(
    coord: impl Strategy<Value = f64> + Clone,
    len: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Vec<SurveyPoint>> {
    prop::collection::vec((coord.clone(), coord), len).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (e, n))| SurveyPoint::new(i, format!("P{}", i + 1), e, n))
            .collect()
    })
}

fn chain_connected(points: &[SurveyPoint], eps: f64) -> bool {
    if points.is_empty() {
        return true;
    }
    let mut seen = vec![false; points.len()];
    let mut stack = vec![0usize];
    seen[0] = true;
    while let Some(i) = stack.pop() {
        for j in 0..points.len() {
            if !seen[j] && points[i].distance_to(&points[j]) <= eps {
                seen[j] = true;
                stack.push(j);
            }
        }
    }
    seen.into_iter().all(|s| s)
}

proptest! {
    /// Property: unique points plus absorbed points equals the input size.
    #[test]
    fn prop_collapse_conserves_points(
        pts in survey_points(lattice_coordinate(), 0..=40),
        tol in 0.0f64..0.05
    ) {
        let groups = group_duplicates(&pts, tol);
        let absorbed: usize = groups.iter().map(|g| g.len() - 1).sum();
        prop_assert_eq!(groups.len() + absorbed, pts.len());
        for g in &groups {
            for m in &g.members {
                prop_assert!(g.members[0].distance_to(m) <= tol.max(0.0));
            }
        }
    }

    /// Property: clusters partition the input and each is chain-connected.
    #[test]
    fn prop_clusters_partition_and_connect(
        pts in survey_points(finite_coordinate(), 0..=30),
        eps in 1.0f64..200.0
    ) {
        let clusters = cluster(&pts, eps);
        let mut ids: Vec<usize> = clusters
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.id))
            .collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..pts.len()).collect::<Vec<_>>());

        for c in &clusters {
            prop_assert!(chain_connected(&c.points, eps), "cluster {} is not chain-connected", c.id);
        }
        for (i, a) in clusters.iter().enumerate() {
            for b in clusters.iter().skip(i + 1) {
                for p in &a.points {
                    for q in &b.points {
                        prop_assert!(p.distance_to(q) > eps);
                    }
                }
            }
        }
    }

    /// Property: cyclic rotation keeps the signed area, reversal negates it.
    #[test]
    fn prop_area_rotation_and_reversal(
        ring in survey_points(finite_coordinate(), 3..=10),
        shift in 0usize..10
    ) {
        let area = signed_area(&ring);
        let tol = 1e-7 * (1.0 + area.abs());

        let mut rotated = ring.clone();
        rotated.rotate_left(shift % ring.len());
        prop_assert!((signed_area(&rotated) - area).abs() <= tol);

        let mut reversed = ring.clone();
        reversed.reverse();
        prop_assert!((signed_area(&reversed) + area).abs() <= tol);
    }

    /// Property: a ring and its reversal get the same self-intersection verdict.
    #[test]
    fn prop_self_intersection_symmetric(ring in survey_points(finite_coordinate(), 3..=9)) {
        let mut reversed = ring.clone();
        reversed.reverse();
        prop_assert_eq!(has_self_intersection(&ring), has_self_intersection(&reversed));
    }

    /// Property: identical input gives identical output.
    #[test]
    fn prop_pipeline_is_deterministic(pts in survey_points(finite_coordinate(), 0..=25)) {
        let triples: Vec<(String, f64, f64)> =
            pts.iter().map(|p| (p.name.clone(), p.easting, p.northing)).collect();
        let refs: Vec<(&str, f64, f64)> =
            triples.iter().map(|(n, e, no)| (n.as_str(), *e, *no)).collect();
        let input = rows(&refs);
        let extractor = BoundaryExtractor::default();
        prop_assert_eq!(extractor.process(&input), extractor.process(&input));
    }
}
