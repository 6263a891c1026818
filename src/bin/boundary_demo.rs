use parcel_boundary::config::{self, OutputFormat};
use parcel_boundary::io::{load_survey_rows, write_json_file};
use parcel_boundary::{BoundaryExtractor, Error, ExtractionReport};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "boundary_demo".to_string());
    let config = config::parse_cli(&program)?;

    let rows = load_survey_rows(&config.input_path)?;
    let extractor = BoundaryExtractor::new(config.effective_params());
    let report = extractor.process_with_diagnostics(&rows);

    if config.output.format.includes_text() {
        print_text_summary(&report);
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            if config.output.format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::Usage(format!("Failed to serialize JSON: {e}")))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn print_text_summary(report: &ExtractionReport) {
    let res = &report.result;
    if res.is_empty() {
        println!("Insufficient data: no usable survey points.");
        return;
    }

    println!("Boundary summary");
    for line in report.trace.summary_lines() {
        println!("  {line}");
    }

    for (poly, check) in res.polygons.iter().zip(&res.validation_report) {
        println!(
            "\nPolygon (cluster {}, {}): {} vertices, area {:.2} m², perimeter {:.2} m, {:?}",
            poly.cluster_id,
            poly.method.as_str(),
            check.vertex_count,
            check.area,
            check.perimeter,
            check.orientation
        );
        if !check.valid {
            println!("  issues: {}", check.issues.join("; "));
        }
        let ring = poly.open_ring();
        for (i, len) in check.edge_lengths.iter().enumerate() {
            let from = &ring[i].name;
            let to = &ring[(i + 1) % ring.len()].name;
            println!("  {from} → {to}: {len:.2} m");
        }
    }

    println!("\nSelected boundary");
    for p in &res.selected_boundary {
        println!(
            "  {:>3}  {:<16} {:>14.3} {:>14.3}",
            p.sequence_number, p.point.name, p.point.easting, p.point.northing
        );
    }
}
