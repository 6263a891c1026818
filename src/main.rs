use parcel_boundary::records::RawRow;
use parcel_boundary::{BoundaryExtractor, BoundaryParams};

fn main() {
    env_logger::init();

    // Demo: a 10 m square surveyed as two lines, one corner observed twice,
    // plus a distant control point.
    let sample = [
        ("Lot-L1-P1", "500000.000", "4100000.000"),
        ("Lot-L1-P2", "500010.000", "4100000.000"),
        ("Lot-L2-P1", "500010.000", "4100010.000"),
        ("Lot-L2-P2", "500000.000", "4100010.000"),
        ("CHK1", "500010.004", "4100010.003"),
        ("BM1", "500400.000", "4100400.000"),
    ];
    let rows: Vec<RawRow> = sample
        .iter()
        .map(|(name, e, n)| {
            [("name", *name), ("easting", *e), ("northing", *n)]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect();

    let extractor = BoundaryExtractor::new(BoundaryParams::default());
    let res = extractor.process(&rows);
    for (poly, report) in res.polygons.iter().zip(&res.validation_report) {
        println!(
            "cluster={} method={} area={:.3} valid={}",
            poly.cluster_id,
            poly.method.as_str(),
            report.area,
            report.valid
        );
    }
    println!(
        "points={} merged={} selected={}",
        res.all_points.len(),
        res.duplicates_mapping.len(),
        res.selected_boundary.len()
    );
}
