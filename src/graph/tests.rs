use super::*;
use crate::polyline::extract_polylines;

fn pt(id: usize, name: &str, e: f64, n: f64) -> SurveyPoint {
    SurveyPoint::new(id, name, e, n)
}

fn rectangle_segments() -> Vec<SurveyPoint> {
    vec![
        pt(0, "Base-L1-P1", 0.0, 0.0),
        pt(1, "Base-L1-P2", 10.0, 0.0),
        pt(2, "Base-L2-P1", 10.0, 10.0),
        pt(3, "Base-L2-P2", 0.0, 10.0),
    ]
}

#[test]
fn rectangle_from_two_segments_traces_four_points() {
    let pts = rectangle_segments();
    let lines = extract_polylines(&pts);
    let trace = trace_boundary(&pts, &lines, &GraphOptions::default()).unwrap();
    let names: Vec<&str> = trace.points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Base-L1-P1", "Base-L1-P2", "Base-L2-P1", "Base-L2-P2"]);
    assert_eq!(trace.bridges, 1);
    assert_eq!(trace.edge_count, 2);
}

#[test]
fn without_bridging_disconnected_segments_are_too_short() {
    let pts = rectangle_segments();
    let lines = extract_polylines(&pts);
    let opts = GraphOptions {
        bridge_gaps: false,
        ..GraphOptions::default()
    };
    assert_eq!(
        trace_boundary(&pts, &lines, &opts),
        Err(TraceFailure::PathTooShort { nodes: 2 })
    );
}

#[test]
fn single_polyline_is_too_sparse() {
    let pts = vec![pt(0, "A-L1-P1", 0.0, 0.0), pt(1, "A-L1-P2", 5.0, 0.0), pt(2, "X", 5.0, 5.0)];
    let lines = extract_polylines(&pts);
    assert!(build_boundary(&pts, &lines, &GraphOptions::default()).is_none());
}

#[test]
fn polylines_off_the_cluster_are_ignored() {
    let pts = rectangle_segments();
    let mut far = vec![pt(10, "Far-L1-P1", 500.0, 500.0), pt(11, "Far-L1-P2", 510.0, 500.0)];
    far.extend(pts.iter().take(2).cloned());
    let lines = extract_polylines(&far);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        trace_boundary(&pts, &lines, &GraphOptions::default()),
        Err(TraceFailure::TooFewPolylines { relevant: 1 })
    );
}

#[test]
fn shared_corners_join_into_one_closed_walk() {
    // Four segments sharing corners: every node has degree 2.
    let pts = vec![
        pt(0, "S-L1-P1", 0.0, 0.0),
        pt(1, "S-L1-P2", 20.0, 0.0),
        pt(2, "S-L2-P1", 20.0, 0.0),
        pt(3, "S-L2-P2", 20.0, 20.0),
        pt(4, "S-L3-P1", 20.0, 20.0),
        pt(5, "S-L3-P2", 0.0, 20.0),
        pt(6, "S-L4-P1", 0.0, 20.0),
        pt(7, "S-L4-P2", 0.0, 0.0),
    ];
    let lines = extract_polylines(&pts);
    let trace = trace_boundary(&pts, &lines, &GraphOptions::default()).unwrap();
    assert_eq!(trace.node_count, 4);
    assert_eq!(trace.edge_count, 4);
    assert_eq!(trace.bridges, 0);
    assert_eq!(trace.points.len(), 4);
    // Starts at the smallest key and steps to the smallest neighbour key.
    assert_eq!(
        (trace.points[0].easting, trace.points[0].northing),
        (0.0, 0.0)
    );
    assert_eq!(
        (trace.points[1].easting, trace.points[1].northing),
        (0.0, 20.0)
    );
}

#[test]
fn branch_prefers_straightest_continuation() {
    let mut g = ConnectivityGraph::new(2);
    let a = pt(0, "a", 0.0, 0.0);
    let b = pt(1, "b", 10.0, 0.0);
    let straight = pt(2, "c", 20.0, 1.0);
    let sharp = pt(3, "d", 10.0, 10.0);
    g.add_edge(&a, &b);
    g.add_edge(&b, &straight);
    g.add_edge(&b, &sharp);
    let walk = g.walk_from(g.key_for(&a), false);
    assert_eq!(walk.nodes[2], g.key_for(&straight));
    assert!(!g.add_edge(&a, &a));
}

#[test]
fn interior_segments_do_not_bridge_into_a_boundary() {
    // Numbered lot with two short fence segments inside it.
    let pts = vec![
        pt(0, "P1", 0.0, 0.0),
        pt(1, "P2", 20.0, 0.0),
        pt(2, "P3", 30.0, 15.0),
        pt(3, "P4", 20.0, 30.0),
        pt(4, "P5", 0.0, 30.0),
        pt(5, "P6", -10.0, 15.0),
        pt(6, "F-L1-P1", 5.0, 10.0),
        pt(7, "F-L1-P2", 6.0, 10.0),
        pt(8, "F-L2-P1", 6.0, 11.0),
        pt(9, "F-L2-P2", 5.0, 11.0),
    ];
    let lines = extract_polylines(&pts);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        trace_boundary(&pts, &lines, &GraphOptions::default()),
        Err(TraceFailure::PathTooShort { nodes: 2 })
    );
}

#[test]
fn bridging_requires_every_cluster_point_on_a_line() {
    let mut pts = rectangle_segments();
    let lines = extract_polylines(&pts);
    pts.push(pt(4, "BM1", 5.0, 5.0));
    assert!(build_boundary(&pts, &lines, &GraphOptions::default()).is_none());
    pts.pop();
    assert!(build_boundary(&pts, &lines, &GraphOptions::default()).is_some());
}
