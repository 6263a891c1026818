use crate::angle::angle_between;
use crate::types::SurveyPoint;
use log::trace;
use nalgebra::Vector2;
use std::collections::{BTreeMap, BTreeSet};

/// Rounded `(easting, northing)` node key.
pub type NodeKey = (i64, i64);

/// Undirected graph over distinct rounded coordinates.
///
/// Nodes and adjacency lists live in ordered maps, so every iteration (start
/// selection, neighbour ties, bridging ties) is in key order and tracing is
/// deterministic.
#[derive(Clone, Debug)]
pub struct ConnectivityGraph {
    scale: f64,
    nodes: BTreeMap<NodeKey, SurveyPoint>,
    adjacency: BTreeMap<NodeKey, BTreeSet<NodeKey>>,
}

/// One walk through the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Walk {
    pub nodes: Vec<NodeKey>,
    /// Number of jumps between unconnected nodes.
    pub bridges: usize,
}

impl ConnectivityGraph {
    pub fn new(key_decimals: u32) -> Self {
        Self {
            scale: 10f64.powi(key_decimals.min(12) as i32),
            nodes: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    pub fn key_for(&self, point: &SurveyPoint) -> NodeKey {
        (
            (point.easting * self.scale).round() as i64,
            (point.northing * self.scale).round() as i64,
        )
    }

    /// Insert a node, keeping the first representative seen for a key.
    pub fn add_node(&mut self, point: &SurveyPoint) -> NodeKey {
        let key = self.key_for(point);
        self.nodes.entry(key).or_insert_with(|| point.clone());
        self.adjacency.entry(key).or_default();
        key
    }

    /// Add an undirected edge. Returns `false` for a self-loop, which is not
    /// stored.
    pub fn add_edge(&mut self, a: &SurveyPoint, b: &SurveyPoint) -> bool {
        let ka = self.add_node(a);
        let kb = self.add_node(b);
        if ka == kb {
            return false;
        }
        self.adjacency.entry(ka).or_default().insert(kb);
        self.adjacency.entry(kb).or_default().insert(ka);
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn degree(&self, key: &NodeKey) -> usize {
        self.adjacency.get(key).map_or(0, BTreeSet::len)
    }

    pub fn point(&self, key: &NodeKey) -> Option<&SurveyPoint> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Preferred trace starts: nodes of degree ≤ 2, or every node when none
    /// qualify.
    pub fn start_candidates(&self) -> Vec<NodeKey> {
        let corners: Vec<NodeKey> = self
            .nodes
            .keys()
            .filter(|k| self.degree(k) <= 2)
            .copied()
            .collect();
        if corners.is_empty() {
            self.nodes.keys().copied().collect()
        } else {
            corners
        }
    }

    fn direction(&self, from: &NodeKey, to: &NodeKey) -> Option<Vector2<f64>> {
        let a = self.nodes.get(from)?.position();
        let b = self.nodes.get(to)?.position();
        Some(b - a)
    }

    /// Greedy straightest-continuation walk from `start`.
    pub fn walk_from(&self, start: NodeKey, bridge_gaps: bool) -> Walk {
        let mut visited: BTreeSet<NodeKey> = BTreeSet::new();
        let mut nodes = vec![start];
        let mut bridges = 0usize;
        let mut heading: Option<Vector2<f64>> = None;
        visited.insert(start);

        while let Some(&current) = nodes.last() {
            let open: Vec<NodeKey> = self
                .adjacency
                .get(&current)
                .into_iter()
                .flatten()
                .filter(|k| !visited.contains(*k))
                .copied()
                .collect();

            let next = if open.is_empty() {
                if !bridge_gaps {
                    break;
                }
                match self.nearest_unvisited(&current, &visited) {
                    Some(k) => {
                        bridges += 1;
                        trace!("graph: bridging gap {current:?} → {k:?}");
                        k
                    }
                    None => break,
                }
            } else {
                match heading {
                    None => open[0],
                    Some(prev) => self.straightest(&current, &prev, &open),
                }
            };

            heading = self.direction(&current, &next);
            visited.insert(next);
            nodes.push(next);
        }

        Walk { nodes, bridges }
    }

    /// Candidate whose direction deviates least from `prev`; the first in key
    /// order wins ties.
    fn straightest(&self, current: &NodeKey, prev: &Vector2<f64>, open: &[NodeKey]) -> NodeKey {
        let mut best = open[0];
        let mut best_turn = f64::INFINITY;
        for cand in open {
            let Some(dir) = self.direction(current, cand) else {
                continue;
            };
            let turn = angle_between(prev, &dir);
            if turn < best_turn {
                best_turn = turn;
                best = *cand;
            }
        }
        best
    }

    fn nearest_unvisited(&self, current: &NodeKey, visited: &BTreeSet<NodeKey>) -> Option<NodeKey> {
        let origin = self.nodes.get(current)?;
        let mut best: Option<(f64, NodeKey)> = None;
        for (key, point) in &self.nodes {
            if visited.contains(key) {
                continue;
            }
            let d = origin.distance_to(point);
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, *key));
            }
        }
        best.map(|(_, k)| k)
    }

    /// Longest walk over all start candidates; the first one wins ties.
    pub fn longest_walk(&self, bridge_gaps: bool) -> Option<Walk> {
        let mut best: Option<Walk> = None;
        for start in self.start_candidates() {
            let walk = self.walk_from(start, bridge_gaps);
            trace!(
                "graph: start {start:?} reaches {} nodes ({} bridges)",
                walk.nodes.len(),
                walk.bridges
            );
            let longer = best
                .as_ref()
                .map_or(true, |b| walk.nodes.len() > b.nodes.len());
            if longer {
                best = Some(walk);
            }
        }
        best
    }
}
