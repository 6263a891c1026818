//! Line/polyline extraction from point names.
//!
//! Two grammars are recognised (see [`naming`]): two-point segments named
//! `<base>-L<line#>-P<1|2>` and open chains named `<base>-P<seq>`. Matching
//! points are grouped per line id, groups with fewer than two points are
//! dropped, and each group is sorted by its embedded sequence number. Points
//! that match neither grammar are ignored.

pub mod naming;

pub use naming::{is_line_endpoint_name, numeric_suffix, parse_line_name, LineGrammar, LineName};

use crate::types::SurveyPoint;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Feature tag carried in the serialized bundle (`"type": "polyline"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    #[default]
    Polyline,
}

/// An ordered surveyed line. Not a closed shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub id: String,
    pub points: Vec<SurveyPoint>,
    #[serde(rename = "type", default)]
    pub feature_type: FeatureType,
    pub grammar: PolylineGrammar,
}

/// Serializable mirror of [`LineGrammar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolylineGrammar {
    Segment,
    Chain,
}

impl From<LineGrammar> for PolylineGrammar {
    fn from(g: LineGrammar) -> Self {
        match g {
            LineGrammar::Segment => PolylineGrammar::Segment,
            LineGrammar::Chain => PolylineGrammar::Chain,
        }
    }
}

impl Polyline {
    pub fn first(&self) -> Option<&SurveyPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SurveyPoint> {
        self.points.last()
    }

    /// Planar length along the vertices.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }
}

/// Group line-named points into polylines, in order of each line id's first
/// appearance.
pub fn extract_polylines(points: &[SurveyPoint]) -> Vec<Polyline> {
    let mut slots: HashMap<(LineGrammar, String), usize> = HashMap::new();
    let mut groups: Vec<(LineName, Vec<(u64, SurveyPoint)>)> = Vec::new();

    for point in points {
        let Some(name) = parse_line_name(&point.name) else {
            continue;
        };
        let key = (name.grammar, name.line_id.clone());
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((name.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push((name.sequence, point.clone()));
    }

    let polylines: Vec<Polyline> = groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(name, mut members)| {
            members.sort_by_key(|(seq, _)| *seq);
            Polyline {
                id: name.line_id,
                points: members.into_iter().map(|(_, p)| p).collect(),
                feature_type: FeatureType::Polyline,
                grammar: name.grammar.into(),
            }
        })
        .collect();

    debug!(
        "polyline: {} points → {} polylines",
        points.len(),
        polylines.len()
    );
    polylines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(id: usize, name: &str, e: f64, n: f64) -> SurveyPoint {
        SurveyPoint::new(id, name, e, n)
    }

    #[test]
    fn groups_segments_and_chains_and_sorts_by_sequence() {
        let pts = vec![
            pt(0, "Fence-P3", 2.0, 0.0),
            pt(1, "Lot-L1-P2", 10.0, 0.0),
            pt(2, "Fence-P1", 0.0, 0.0),
            pt(3, "Lot-L1-P1", 0.0, 0.0),
            pt(4, "Fence-P2", 1.0, 0.0),
            pt(5, "Lonely-L9-P1", 5.0, 5.0),
            pt(6, "TREE", 3.0, 3.0),
        ];
        let lines = extract_polylines(&pts);
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].id, "Fence");
        assert_eq!(lines[0].grammar, PolylineGrammar::Chain);
        let names: Vec<&str> = lines[0].points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Fence-P1", "Fence-P2", "Fence-P3"]);
        assert!((lines[0].length() - 2.0).abs() < 1e-12);

        assert_eq!(lines[1].id, "Lot-L1");
        assert_eq!(lines[1].first().map(|p| p.id), Some(3));
        assert_eq!(lines[1].last().map(|p| p.id), Some(1));
    }

    #[test]
    fn serializes_with_polyline_type_tag() {
        let pts = vec![pt(0, "A-L1-P1", 0.0, 0.0), pt(1, "A-L1-P2", 1.0, 0.0)];
        let lines = extract_polylines(&pts);
        let json = serde_json::to_value(&lines[0]).unwrap();
        assert_eq!(json["type"], "polyline");
        assert_eq!(json["id"], "A-L1");
        assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
    }
}
