mod common;

use parcel_boundary::config::{load_config, OutputFormat};
use parcel_boundary::extractor::{ExtractionMode, SurveyProfile};
use parcel_boundary::io::{load_survey_rows, write_json_file};
use parcel_boundary::records::normalize_rows;
use parcel_boundary::{BoundaryExtractor, Error};
use std::fs;

#[test]
fn config_resolves_input_relative_to_its_directory() {
    common::init_logger();
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("run.json");
    fs::write(
        &config_path,
        r#"{
            "input_path": "survey.csv",
            "output": { "format": "both" },
            "params": { "mode": "hull_outline", "min_area_m2": 5.0 }
        }"#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.input_path, dir.path().join("survey.csv"));
    assert_eq!(config.output.format, OutputFormat::Both);
    assert!(config.output.json_out.is_none());
    assert_eq!(config.params.mode, ExtractionMode::HullOutline);
    assert_eq!(config.params.min_area_m2, 5.0);
    // Omitted parameters keep their defaults.
    assert_eq!(config.params.cluster_eps_m, 25.0);
    assert_eq!(config.effective_params().cluster_eps_m, 25.0);
}

#[test]
fn profile_overrides_linkage_distance() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("run.json");
    fs::write(
        &config_path,
        r#"{ "input_path": "/data/site.csv", "profile": "site", "params": { "cluster_eps_m": 7.0 } }"#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.profile, Some(SurveyProfile::Site));
    assert_eq!(config.params.cluster_eps_m, 7.0);
    assert_eq!(config.effective_params().cluster_eps_m, 100.0);
}

#[test]
fn malformed_config_reports_json_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("broken.json");
    fs::write(&config_path, "{ not json").unwrap();

    let err = load_config(&config_path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_survey_rows(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn survey_tables_in_several_layouts_load_to_the_same_points() {
    common::init_logger();
    let dir = tempfile::tempdir().unwrap();
    let layouts = [
        ("comma.csv", "name,easting,northing\nA,0,0\nB,10,0\nC,10,10\n"),
        ("semi.csv", "Point;X;Y\nA;0;0\nB;10;0\nC;10;10\n"),
        ("tab.txt", "id\tE\tN\nA\t0\t0\nB\t10\t0\nC\t10\t10\n"),
        ("plain.txt", "0 0 A\n10 0 B\n10 10 C\n"),
        ("ids.csv", "ID,Point,East,North\n1,A,0,0\n2,B,10,0\n3,C,10,10\n"),
    ];

    for (file, content) in layouts {
        let path = dir.path().join(file);
        fs::write(&path, content).unwrap();
        let rows = load_survey_rows(&path).unwrap();
        let points = normalize_rows(&rows);
        assert_eq!(points.len(), 3, "{file}");
        assert_eq!(points[1].name, "B", "{file}");
        assert_eq!(points[1].easting, 10.0, "{file}");
        assert_eq!(points[2].northing, 10.0, "{file}");
    }
}

#[test]
fn report_is_written_into_created_directories() {
    let dir = tempfile::tempdir().unwrap();
    let rows = common::synthetic_survey::rows(&[
        ("P1", 0.0, 0.0),
        ("P2", 10.0, 0.0),
        ("P3", 10.0, 10.0),
        ("P4", 0.0, 10.0),
    ]);
    let report = BoundaryExtractor::default().process_with_diagnostics(&rows);

    let out = dir.path().join("nested").join("out").join("report.json");
    write_json_file(&out, &report).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["result"]["polygons"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["trace"]["input"]["accepted"], 4);
}
