//! Stage runners shared by the extractor and standalone tools. Each runner
//! executes one stage, times it and returns both the stage output and its
//! diagnostics record.

use super::timing::elapsed_ms;
use super::{
    ClusterConstruction, ClusterStage, ConstructionStage, DedupStage, PolylineSource,
    PolylineStage, SelectionStage,
};
use crate::cluster::{cluster, SpatialCluster};
use crate::dedup::{group_duplicates, split_groups};
use crate::extractor::params::BoundaryParams;
use crate::polygon::construct;
use crate::polyline::{extract_polylines, Polyline, PolylineGrammar};
use crate::select::{select, Selection};
use crate::types::{DuplicateMapping, Polygon, SurveyPoint};
use crate::validate::{validate, ValidationReport};
use std::time::Instant;

pub struct DedupStageOutput {
    pub stage: DedupStage,
    pub unique: Vec<SurveyPoint>,
    pub mapping: Vec<DuplicateMapping>,
}

pub fn run_dedup_stage(points: &[SurveyPoint], tolerance_m: f64) -> DedupStageOutput {
    let start = Instant::now();
    let groups = group_duplicates(points, tolerance_m);
    let (unique, mapping) = split_groups(&groups);
    let max_offset_m = mapping
        .iter()
        .map(|m| m.dx.hypot(m.dy))
        .fold(0.0, f64::max);
    let stage = DedupStage {
        elapsed_ms: elapsed_ms(start),
        tolerance_m,
        input_points: points.len(),
        unique_points: unique.len(),
        merged: mapping.len(),
        groups_with_duplicates: groups.iter().filter(|g| g.len() > 1).count(),
        largest_group: groups.iter().map(|g| g.len()).max().unwrap_or(0),
        max_offset_m,
    };
    DedupStageOutput {
        stage,
        unique,
        mapping,
    }
}

pub struct ClusterStageOutput {
    pub stage: ClusterStage,
    pub clusters: Vec<SpatialCluster>,
}

pub fn run_cluster_stage(points: &[SurveyPoint], eps_m: f64) -> ClusterStageOutput {
    let start = Instant::now();
    let clusters = cluster(points, eps_m);
    let stage = ClusterStage {
        elapsed_ms: elapsed_ms(start),
        eps_m,
        clusters: clusters.len(),
        singletons: clusters.iter().filter(|c| c.len() == 1).count(),
        largest_cluster: clusters.iter().map(SpatialCluster::len).max().unwrap_or(0),
    };
    ClusterStageOutput { stage, clusters }
}

pub struct PolylineStageOutput {
    pub stage: PolylineStage,
    pub polylines: Vec<Polyline>,
}

pub fn run_polyline_stage(points: &[SurveyPoint], source: PolylineSource) -> PolylineStageOutput {
    let start = Instant::now();
    let polylines = extract_polylines(points);
    let count = |g: PolylineGrammar| polylines.iter().filter(|l| l.grammar == g).count();
    let stage = PolylineStage {
        elapsed_ms: elapsed_ms(start),
        source,
        segments: count(PolylineGrammar::Segment),
        chains: count(PolylineGrammar::Chain),
        points_on_lines: polylines.iter().map(|l| l.points.len()).sum(),
    };
    PolylineStageOutput { stage, polylines }
}

pub struct ConstructionStageOutput {
    pub stage: ConstructionStage,
    pub polygons: Vec<Polygon>,
    pub reports: Vec<ValidationReport>,
}

/// Construct and validate one polygon per eligible cluster, in cluster order.
pub fn run_construction_stage(
    clusters: &[SpatialCluster],
    polylines: &[Polyline],
    params: &BoundaryParams,
) -> ConstructionStageOutput {
    let start = Instant::now();
    let mut polygons = Vec::new();
    let mut reports = Vec::new();
    let mut records = Vec::with_capacity(clusters.len());
    for c in clusters {
        let outcome = construct(c.id, &c.points, polylines, params);
        records.push(ClusterConstruction::from(&outcome));
        if let Some(polygon) = outcome.polygon {
            reports.push(validate(&polygon, params.min_area_m2));
            polygons.push(polygon);
        }
    }
    let stage = ConstructionStage {
        elapsed_ms: elapsed_ms(start),
        polygons: polygons.len(),
        valid_polygons: reports.iter().filter(|r| r.valid).count(),
        clusters: records,
    };
    ConstructionStageOutput {
        stage,
        polygons,
        reports,
    }
}

pub struct SelectionStageOutput {
    pub stage: SelectionStage,
    pub selection: Selection,
}

pub fn run_selection_stage(
    polygons: &[Polygon],
    reports: &[ValidationReport],
    unique_points: &[SurveyPoint],
) -> SelectionStageOutput {
    let start = Instant::now();
    let selection = select(polygons, reports, unique_points);
    let stage = SelectionStage {
        elapsed_ms: elapsed_ms(start),
        source: selection.source,
        cluster_id: selection.cluster_id,
        points: selection.points.len(),
    };
    SelectionStageOutput { stage, selection }
}
