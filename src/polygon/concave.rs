//! k-nearest-neighbour concave hull.
//!
//! Boundary growth starts at the point with the smallest easting (then
//! northing) facing north and walks clockwise: at each step the k nearest
//! remaining points are ranked by how far left they turn from the current
//! heading, and the first whose edge crosses no accepted hull edge is taken.
//! The start point becomes selectable again after three steps; selecting it
//! closes the ring. A walk that gets stuck, fails to close, or leaves a point
//! outside the ring is rejected, and the caller retries with a larger k.

use super::{convex_hull, ConcaveHullOptions};
use crate::angle::signed_turn;
use crate::geometry::{point_in_ring, segments_cross, signed_area};
use crate::types::SurveyPoint;
use log::{debug, trace};
use nalgebra::{Point2, Vector2};

/// Containment slack for points lying on the hull.
const ON_EDGE_TOL_M: f64 = 1e-6;

/// Successful concave hull: an open clockwise ring and the k that produced
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcaveHull {
    pub ring: Vec<SurveyPoint>,
    pub k: usize,
}

/// Try `k`, `k + 1`, … up to `max_retries` increments. `None` when every
/// attempt fails or the distinct points are collinear or fewer than three.
pub fn concave_hull(points: &[SurveyPoint], options: &ConcaveHullOptions) -> Option<ConcaveHull> {
    let distinct = distinct_points(points);
    let n = distinct.len();
    if n < 3 || convex_hull(&distinct).len() < 3 {
        return None;
    }
    if n == 3 {
        let mut ring = distinct;
        if signed_area(&ring) > 0.0 {
            ring.reverse();
        }
        return Some(ConcaveHull { ring, k: 2 });
    }

    let k0 = options.k.max(3);
    for attempt in 0..=options.max_retries {
        let k = (k0 + attempt).min(n - 1);
        match grow_hull(&distinct, k) {
            Some(ring) => {
                debug!("concave: {} points → {} vertices (k={k})", n, ring.len());
                return Some(ConcaveHull { ring, k });
            }
            None => trace!("concave: k={k} failed"),
        }
        if k == n - 1 {
            break;
        }
    }
    debug!("concave: no simple hull for {n} points");
    None
}

fn distinct_points(points: &[SurveyPoint]) -> Vec<SurveyPoint> {
    let mut out: Vec<SurveyPoint> = Vec::with_capacity(points.len());
    for p in points {
        if !out
            .iter()
            .any(|q| q.easting == p.easting && q.northing == p.northing)
        {
            out.push(p.clone());
        }
    }
    out
}

fn grow_hull(points: &[SurveyPoint], k: usize) -> Option<Vec<SurveyPoint>> {
    let n = points.len();
    let first = (0..n).min_by(|&a, &b| {
        points[a]
            .easting
            .total_cmp(&points[b].easting)
            .then(points[a].northing.total_cmp(&points[b].northing))
    })?;

    let mut available: Vec<usize> = (0..n).filter(|&i| i != first).collect();
    let mut hull: Vec<usize> = vec![first];
    let mut current = first;
    let mut heading = Vector2::new(0.0, 1.0);
    let mut closed = false;

    for step in 0..=n {
        if step == 3 {
            available.push(first);
        }
        let here = points[current].position();
        let mut candidates = nearest(points, &available, &here, k);
        candidates.sort_by(|&a, &b| {
            let ta = signed_turn(&heading, &(points[a].position() - here));
            let tb = signed_turn(&heading, &(points[b].position() - here));
            tb.total_cmp(&ta)
        });

        let next = candidates
            .into_iter()
            .find(|&c| !crosses_hull(points, &hull, current, c))?;
        if next == first {
            closed = true;
            break;
        }
        heading = points[next].position() - here;
        hull.push(next);
        available.retain(|&i| i != next);
        current = next;
    }
    if !closed {
        return None;
    }

    let ring: Vec<Point2<f64>> = hull.iter().map(|&i| points[i].position()).collect();
    let all_inside = points
        .iter()
        .all(|p| point_in_ring(&p.position(), &ring, ON_EDGE_TOL_M));
    if !all_inside {
        return None;
    }
    Some(hull.into_iter().map(|i| points[i].clone()).collect())
}

/// The `k` indices of `available` closest to `here`; index order breaks
/// distance ties.
fn nearest(points: &[SurveyPoint], available: &[usize], here: &Point2<f64>, k: usize) -> Vec<usize> {
    let mut ranked: Vec<(f64, usize)> = available
        .iter()
        .map(|&i| (nalgebra::distance(here, &points[i].position()), i))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    ranked.truncate(k);
    ranked.into_iter().map(|(_, i)| i).collect()
}

/// `true` when the edge `from → to` properly crosses an accepted hull edge.
fn crosses_hull(points: &[SurveyPoint], hull: &[usize], from: usize, to: usize) -> bool {
    let a = points[from].position();
    let b = points[to].position();
    hull.windows(2).any(|w| {
        let c = points[w[0]].position();
        let d = points[w[1]].position();
        segments_cross(&a, &b, &c, &d)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::has_self_intersection;

    fn pts(coords: &[(f64, f64)]) -> Vec<SurveyPoint> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(e, n))| SurveyPoint::new(i, format!("C{i}"), e, n))
            .collect()
    }

    #[test]
    fn square_outline_is_clockwise() {
        let input = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hull = concave_hull(&input, &ConcaveHullOptions::default()).unwrap();
        assert_eq!(hull.ring.len(), 4);
        assert!((signed_area(&hull.ring) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_is_returned_clockwise() {
        let ccw = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let hull = concave_hull(&ccw, &ConcaveHullOptions::default()).unwrap();
        assert!((signed_area(&hull.ring) + 50.0).abs() < 1e-9);

        let mut cw = ccw.clone();
        cw.reverse();
        let hull = concave_hull(&cw, &ConcaveHullOptions::default()).unwrap();
        assert_eq!(hull.ring, cw);
    }

    #[test]
    fn follows_notch_of_l_shape() {
        // L-shaped lot sampled along its outline; its convex hull covers 350 m².
        let mut coords = Vec::new();
        for i in 0..=4 {
            coords.push((i as f64 * 5.0, 0.0));
        }
        for i in 1..=2 {
            coords.push((20.0, i as f64 * 5.0));
        }
        for i in 1..=2 {
            coords.push((20.0 - i as f64 * 5.0, 10.0));
        }
        for i in 1..=2 {
            coords.push((10.0, 10.0 + i as f64 * 5.0));
        }
        for i in 1..=2 {
            coords.push((10.0 - i as f64 * 5.0, 20.0));
        }
        for i in 1..=3 {
            coords.push((0.0, 20.0 - i as f64 * 5.0));
        }
        let input = pts(&coords);
        let hull = concave_hull(&input, &ConcaveHullOptions::default()).unwrap();
        assert!(!has_self_intersection(&hull.ring));
        let area = signed_area(&hull.ring).abs();
        assert!(
            area < 350.0,
            "expected the notch to be followed, got area {area}"
        );
        assert!(area > 250.0, "area {area} too small for the L-shape");
    }

    #[test]
    fn degenerate_input_has_no_hull() {
        let input = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert!(concave_hull(&input, &ConcaveHullOptions::default()).is_none());
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert!(concave_hull(&line, &ConcaveHullOptions::default()).is_none());
    }
}
