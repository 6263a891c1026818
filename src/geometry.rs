//! Planar predicates shared by the construction and validation stages.
//!
//! All functions work on open rings (no closing repeat) and use modulo
//! indexing for the wrap-around edge. Coordinates are shifted to the first
//! vertex before products are formed; projected eastings/northings are large
//! enough that the raw shoelace terms lose several digits otherwise.

use crate::types::SurveyPoint;
use nalgebra::{Point2, Vector2};

/// Sign of the turn `a → b → c`: `1` counterclockwise, `-1` clockwise, `0`
/// collinear.
#[inline]
pub fn orientation_sign(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> i8 {
    let ab: Vector2<f64> = b - a;
    let ac: Vector2<f64> = c - a;
    let cross = ab.perp(&ac);
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

/// Proper crossing test for segments `ab` and `cd`.
///
/// Both endpoint pairs must lie strictly on opposite sides of the other
/// segment's supporting line. Touching at an endpoint and collinear overlap do
/// not count, which keeps the verdict independent of segment direction.
#[inline]
pub fn segments_cross(
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
    d: &Point2<f64>,
) -> bool {
    let o1 = orientation_sign(c, d, a);
    let o2 = orientation_sign(c, d, b);
    let o3 = orientation_sign(a, b, c);
    let o4 = orientation_sign(a, b, d);
    o1 * o2 < 0 && o3 * o4 < 0
}

/// Returns `true` when any two non-adjacent edges of the open ring cross.
///
/// Edge `i` joins vertex `i` to `i + 1 (mod n)`. Pairs `(i, j)` with
/// `j >= i + 2` are tested, except `(0, n - 1)` which share vertex 0.
pub fn has_self_intersection(ring: &[SurveyPoint]) -> bool {
    first_crossing(ring).is_some()
}

/// First crossing edge pair `(i, j)` of the open ring, if any.
pub fn first_crossing(ring: &[SurveyPoint]) -> Option<(usize, usize)> {
    let n = ring.len();
    if n < 4 {
        return None;
    }
    let pts: Vec<Point2<f64>> = ring.iter().map(SurveyPoint::position).collect();
    for i in 0..n {
        let (a, b) = (&pts[i], &pts[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (&pts[j], &pts[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Signed shoelace area of the open ring. Positive for counterclockwise
/// rings.
pub fn signed_area(ring: &[SurveyPoint]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let origin = ring[0].position();
    let mut sum = 0.0;
    for i in 0..n {
        let p = ring[i].position() - origin;
        let q = ring[(i + 1) % n].position() - origin;
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Unweighted mean of the vertices.
pub fn vertex_mean(points: &[SurveyPoint]) -> Option<Point2<f64>> {
    if points.is_empty() {
        return None;
    }
    let inv = 1.0 / points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.easting, sy + p.northing));
    Some(Point2::new(sx * inv, sy * inv))
}

/// Area centroid of the open ring; falls back to the vertex mean when the
/// ring has (near) zero area.
pub fn centroid(ring: &[SurveyPoint]) -> Option<Point2<f64>> {
    let mean = vertex_mean(ring)?;
    let n = ring.len();
    if n < 3 {
        return Some(mean);
    }
    let origin = ring[0].position();
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = ring[i].position() - origin;
        let q = ring[(i + 1) % n].position() - origin;
        let w = p.x * q.y - q.x * p.y;
        area2 += w;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    if area2.abs() <= 1e-12 {
        return Some(mean);
    }
    let scale = 1.0 / (3.0 * area2);
    Some(Point2::new(origin.x + cx * scale, origin.y + cy * scale))
}

/// Distance from `p` to the segment `ab`.
pub fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f64::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Even-odd containment test. Points within `tol` of an edge count as
/// inside.
pub fn point_in_ring(p: &Point2<f64>, ring: &[Point2<f64>], tol: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if distance_to_segment(p, a, b) <= tol {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}
