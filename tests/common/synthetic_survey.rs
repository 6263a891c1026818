use parcel_boundary::records::RawRow;
use parcel_boundary::SurveyPoint;

/// Build header-keyed rows from `(name, easting, northing)` triples.
pub fn rows(points: &[(&str, f64, f64)]) -> Vec<RawRow> {
    points
        .iter()
        .map(|&(name, e, n)| {
            let mut row = RawRow::new();
            row.insert("name".to_string(), name.to_string());
            row.insert("easting".to_string(), format!("{e}"));
            row.insert("northing".to_string(), format!("{n}"));
            row
        })
        .collect()
}

pub fn points(coords: &[(&str, f64, f64)]) -> Vec<SurveyPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(name, e, n))| SurveyPoint::new(i, name, e, n))
        .collect()
}

/// Axis-aligned square with corners named `P1..P4` counterclockwise from the
/// lower-left corner.
pub fn square(origin: (f64, f64), side: f64) -> Vec<(String, f64, f64)> {
    let (e, n) = origin;
    vec![
        ("P1".to_string(), e, n),
        ("P2".to_string(), e + side, n),
        ("P3".to_string(), e + side, n + side),
        ("P4".to_string(), e, n + side),
    ]
}

/// Rectangle surveyed as two opposite sides `<base>-L1` and `<base>-L2`.
pub fn two_line_rectangle(base: &str, origin: (f64, f64), w: f64, h: f64) -> Vec<(String, f64, f64)> {
    let (e, n) = origin;
    vec![
        (format!("{base}-L1-P1"), e, n),
        (format!("{base}-L1-P2"), e + w, n),
        (format!("{base}-L2-P1"), e + w, n + h),
        (format!("{base}-L2-P2"), e, n + h),
    ]
}

pub fn as_refs(owned: &[(String, f64, f64)]) -> Vec<(&str, f64, f64)> {
    owned.iter().map(|(s, e, n)| (s.as_str(), *e, *n)).collect()
}
