//! Connectivity graph builder and boundary tracer.
//!
//! Polylines that belong to a cluster are turned into an undirected graph over
//! rounded coordinates, and the longest greedy "straightest continuation" walk
//! through it becomes a candidate boundary ordering. The walk prefers corner
//! nodes (degree ≤ 2) as starts and, at each branch, the neighbour whose
//! direction turns least away from the previous edge.
//!
//! A walk that dead-ends may jump to the nearest unvisited node only when the
//! polylines reach every point of the cluster (two opposite sides surveyed as
//! separate lines). Otherwise a walk stops at its first dead end.
//!
//! Graph nodes are reported as the nearest point of the target cluster, so a
//! trace never introduces coordinates from outside the cluster.

mod connectivity;
mod options;

pub use connectivity::{ConnectivityGraph, NodeKey, Walk};
pub use options::GraphOptions;

use crate::polyline::Polyline;
use crate::types::SurveyPoint;
use log::debug;
use serde::Serialize;

/// Why a cluster produced no traced boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum TraceFailure {
    /// Fewer than two polylines lie on the cluster.
    TooFewPolylines { relevant: usize },
    /// The longest walk visited fewer than three nodes.
    PathTooShort { nodes: usize },
}

/// A successful trace with the statistics of the graph it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryTrace {
    pub points: Vec<SurveyPoint>,
    pub relevant_polylines: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub bridges: usize,
}

/// Ordered boundary for `cluster_points`, or `None` when the polylines are too
/// sparse to trace one.
pub fn build_boundary(
    cluster_points: &[SurveyPoint],
    polylines: &[Polyline],
    options: &GraphOptions,
) -> Option<Vec<SurveyPoint>> {
    trace_boundary(cluster_points, polylines, options)
        .ok()
        .map(|t| t.points)
}

/// Like [`build_boundary`] but reports why tracing failed.
pub fn trace_boundary(
    cluster_points: &[SurveyPoint],
    polylines: &[Polyline],
    options: &GraphOptions,
) -> Result<BoundaryTrace, TraceFailure> {
    let tol = options.coordinate_match_tol_m.max(0.0);
    let relevant: Vec<&Polyline> = polylines
        .iter()
        .filter(|line| lies_on_cluster(line, cluster_points, tol))
        .collect();
    if relevant.len() < 2 {
        debug!(
            "graph: {} relevant polylines, need 2",
            relevant.len()
        );
        return Err(TraceFailure::TooFewPolylines {
            relevant: relevant.len(),
        });
    }

    let mut graph = ConnectivityGraph::new(options.key_decimals);
    for line in &relevant {
        for pair in line.points.windows(2) {
            let a = snap(&pair[0], cluster_points);
            let b = snap(&pair[1], cluster_points);
            graph.add_edge(a, b);
        }
    }

    let mut walk = longest_or_empty(&graph, options.bridge_gaps);
    if walk.bridges > 0 && !covers_cluster(&graph, cluster_points) {
        // Bridging only joins lines that make up the whole outline; stray
        // segments inside a larger cluster must not stand in for it.
        debug!(
            "graph: bridged walk rejected, lines reach {} nodes for {} cluster points",
            graph.node_count(),
            cluster_points.len()
        );
        walk = longest_or_empty(&graph, false);
    }
    let points: Vec<SurveyPoint> = walk
        .nodes
        .iter()
        .filter_map(|k| graph.point(k).cloned())
        .collect();
    debug!(
        "graph: {} polylines, {} nodes, {} edges → path of {} ({} bridges)",
        relevant.len(),
        graph.node_count(),
        graph.edge_count(),
        points.len(),
        walk.bridges
    );
    if points.len() < 3 {
        return Err(TraceFailure::PathTooShort {
            nodes: points.len(),
        });
    }
    Ok(BoundaryTrace {
        points,
        relevant_polylines: relevant.len(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        bridges: walk.bridges,
    })
}

fn longest_or_empty(graph: &ConnectivityGraph, bridge_gaps: bool) -> Walk {
    graph.longest_walk(bridge_gaps).unwrap_or(Walk {
        nodes: Vec::new(),
        bridges: 0,
    })
}

/// `true` when every cluster point is a graph node.
fn covers_cluster(graph: &ConnectivityGraph, cluster_points: &[SurveyPoint]) -> bool {
    cluster_points
        .iter()
        .all(|p| graph.contains(&graph.key_for(p)))
}

fn lies_on_cluster(line: &Polyline, cluster_points: &[SurveyPoint], tol: f64) -> bool {
    !line.points.is_empty()
        && line
            .points
            .iter()
            .all(|p| cluster_points.iter().any(|c| c.distance_to(p) <= tol))
}

/// Nearest cluster point to `p`; `p` itself when the cluster is empty.
fn snap<'a>(p: &'a SurveyPoint, cluster_points: &'a [SurveyPoint]) -> &'a SurveyPoint {
    cluster_points
        .iter()
        .min_by(|a, b| a.distance_to(p).total_cmp(&b.distance_to(p)))
        .unwrap_or(p)
}

#[cfg(test)]
mod tests;
