use serde::{Deserialize, Serialize};

/// Options controlling graph construction and boundary tracing.
///
/// - `coordinate_match_tol_m`: a polyline takes part only if every one of its
///   points lies within this distance of a point of the target cluster.
/// - `key_decimals`: coordinates are rounded to this many decimals to form
///   node keys, so endpoints observed twice collapse onto one node.
/// - `bridge_gaps`: when a walk dead-ends with unvisited nodes left, jump to
///   the nearest one instead of stopping. A bridged walk is kept only when
///   the graph nodes cover every point of the cluster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub coordinate_match_tol_m: f64,
    pub key_decimals: u32,
    pub bridge_gaps: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            coordinate_match_tol_m: 1.0,
            key_decimals: 2,
            bridge_gaps: true,
        }
    }
}
