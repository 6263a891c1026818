use crate::types::SurveyPoint;
use nalgebra::Vector2;

fn turn(o: &SurveyPoint, a: &SurveyPoint, b: &SurveyPoint) -> f64 {
    let oa: Vector2<f64> = a.position() - o.position();
    let ob: Vector2<f64> = b.position() - o.position();
    oa.perp(&ob)
}

/// Convex hull by the monotone chain scan.
///
/// Points are sorted by easting then northing; the lower and upper chains
/// keep only strict left turns, so collinear points are dropped. The result
/// is an open, counterclockwise ring. Coincident points count once. Fewer than
/// three returned points means the input is degenerate (collinear or tiny).
pub fn convex_hull(points: &[SurveyPoint]) -> Vec<SurveyPoint> {
    let mut sorted: Vec<&SurveyPoint> = points.iter().collect();
    sorted.sort_by(|a, b| {
        a.easting
            .total_cmp(&b.easting)
            .then(a.northing.total_cmp(&b.northing))
    });
    sorted.dedup_by(|a, b| a.easting == b.easting && a.northing == b.northing);
    if sorted.len() < 3 {
        return sorted.into_iter().cloned().collect();
    }

    let mut lower: Vec<&SurveyPoint> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<&SurveyPoint> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower.into_iter().cloned().collect()
}
