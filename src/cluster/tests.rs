use super::*;

fn pt(id: usize, e: f64, n: f64) -> SurveyPoint {
    SurveyPoint::new(id, format!("P{}", id + 1), e, n)
}

#[test]
fn two_far_groups_form_two_clusters() {
    let pts = vec![
        pt(0, 0.0, 0.0),
        pt(1, 1000.0, 1000.0),
        pt(2, 10.0, 0.0),
        pt(3, 1010.0, 1000.0),
    ];
    let clusters = cluster(&pts, DEFAULT_EPS_M);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].id, 0);
    let ids: Vec<usize> = clusters[0].points.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 2]);
    let ids: Vec<usize> = clusters[1].points.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(clusters[1].bounding_box.width(), 10.0);
}

#[test]
fn linkage_is_transitive() {
    // 20 m hops chain into one cluster although the ends are 60 m apart.
    let pts: Vec<SurveyPoint> = (0..4).map(|i| pt(i, 20.0 * i as f64, 0.0)).collect();
    let clusters = cluster(&pts, 25.0);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 4);
    assert!((clusters[0].mean[0] - 30.0).abs() < 1e-9);
}

#[test]
fn distance_equal_to_eps_links() {
    let pts = vec![pt(0, 0.0, 0.0), pt(1, 25.0, 0.0)];
    assert_eq!(cluster(&pts, 25.0).len(), 1);
    assert_eq!(cluster(&pts, 24.999).len(), 2);
}

#[test]
fn isolated_points_are_singletons() {
    let pts = vec![pt(0, 0.0, 0.0), pt(1, 500.0, 0.0), pt(2, 0.0, 500.0)];
    let clusters = cluster(&pts, 25.0);
    assert_eq!(clusters.len(), 3);
    let total: usize = clusters.iter().map(SpatialCluster::len).sum();
    assert_eq!(total, 3);
    let summary = clusters[2].summary();
    assert_eq!(summary.cluster_id, 2);
    assert_eq!(summary.number_of_points, 1);
}

#[test]
fn empty_input_gives_no_clusters() {
    assert!(cluster(&[], 25.0).is_empty());
}
