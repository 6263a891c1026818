use serde::{Deserialize, Serialize};

/// k-nearest-neighbour concave hull parameters.
///
/// - `k`: initial neighbourhood size (clamped to at least 3).
/// - `max_retries`: how many times `k` is increased by one after a failed
///   attempt before giving up in favour of the convex hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcaveHullOptions {
    pub k: usize,
    pub max_retries: usize,
}

impl Default for ConcaveHullOptions {
    fn default() -> Self {
        Self { k: 3, max_retries: 5 }
    }
}
