//! Angle utilities used by the ordering and tracing stages.

use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

/// Normalizes an angle into the range [0, 2π).
#[inline]
pub fn normalize_full_turn(angle: f64) -> f64 {
    let norm = angle.rem_euclid(TAU);
    if norm >= TAU - 1e-12 {
        0.0
    } else {
        norm
    }
}

/// Polar angle of `v` measured counterclockwise from east, in [0, 2π).
#[inline]
pub fn heading(v: &Vector2<f64>) -> f64 {
    normalize_full_turn(v.y.atan2(v.x))
}

/// Computes the unsigned angle between two 2D vectors in radians.
/// Returns a value in [0, π]. Zero if the vectors are parallel
/// and pointing in the same direction; π if they are opposite.
#[inline]
pub fn angle_between(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    let na = a.norm().max(1e-12);
    let nb = b.norm().max(1e-12);
    (a.dot(b) / (na * nb)).clamp(-1.0, 1.0).acos()
}

/// Signed turn from direction `a` to direction `b` in (-π, π]. Left
/// (counterclockwise) turns are positive.
#[inline]
pub fn signed_turn(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    let turn = a.perp(b).atan2(a.dot(b));
    if turn <= -PI {
        PI
    } else {
        turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_full_turn_basic() {
        assert!(approx_eq(normalize_full_turn(0.5), 0.5));
        assert!(approx_eq(normalize_full_turn(-FRAC_PI_2), 3.0 * FRAC_PI_2));
        assert!(approx_eq(normalize_full_turn(TAU), 0.0));
        assert!(approx_eq(normalize_full_turn(3.0 * TAU + 1.0), 1.0));
    }

    #[test]
    fn heading_counts_from_east() {
        assert!(approx_eq(heading(&Vector2::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(heading(&Vector2::new(0.0, 1.0)), FRAC_PI_2));
        assert!(approx_eq(heading(&Vector2::new(0.0, -1.0)), 3.0 * FRAC_PI_2));
    }

    #[test]
    fn angle_between_basic() {
        let a = Vector2::new(1.0, 0.0);
        assert!(approx_eq(angle_between(&a, &a), 0.0));
        assert!(approx_eq(angle_between(&a, &Vector2::new(-2.0, 0.0)), PI));
        assert!(approx_eq(
            angle_between(&a, &Vector2::new(0.0, 3.0)),
            FRAC_PI_2
        ));
    }

    #[test]
    fn signed_turn_sign_follows_side() {
        let east = Vector2::new(1.0, 0.0);
        assert!(approx_eq(signed_turn(&east, &Vector2::new(0.0, 1.0)), FRAC_PI_2));
        assert!(approx_eq(
            signed_turn(&east, &Vector2::new(0.0, -1.0)),
            -FRAC_PI_2
        ));
        assert!(approx_eq(signed_turn(&east, &Vector2::new(-1.0, 0.0)), PI));
    }
}
