use crate::types::{BoundingBox, SurveyPoint};

/// Running state of one growing cluster: member indices plus extent and
/// coordinate sums.
pub(crate) struct ClusterAccumulator {
    pub indices: Vec<usize>,
    pub bbox: Option<BoundingBox>,
    pub sum_e: f64,
    pub sum_n: f64,
}

impl ClusterAccumulator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            bbox: None,
            sum_e: 0.0,
            sum_n: 0.0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.indices.clear();
        self.bbox = None;
        self.sum_e = 0.0;
        self.sum_n = 0.0;
    }

    pub(crate) fn push(&mut self, idx: usize, point: &SurveyPoint) {
        self.indices.push(idx);
        self.sum_e += point.easting;
        self.sum_n += point.northing;
        match self.bbox.as_mut() {
            Some(b) => b.include(point),
            None => self.bbox = Some(BoundingBox::around(point)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    /// Mean member position, `(0, 0)` while empty.
    pub(crate) fn mean(&self) -> (f64, f64) {
        if self.indices.is_empty() {
            (0.0, 0.0)
        } else {
            let inv = 1.0 / self.indices.len() as f64;
            (self.sum_e * inv, self.sum_n * inv)
        }
    }

    /// Member indices in input order.
    pub(crate) fn sorted_indices(&self) -> Vec<usize> {
        let mut idx = self.indices.clone();
        idx.sort_unstable();
        idx
    }
}
