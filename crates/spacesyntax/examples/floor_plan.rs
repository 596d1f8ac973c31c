//! Score a small two-room plan and print the report.
//!
//! Usage:
//!   cargo run -p spacesyntax --example floor_plan
//!   cargo run -p spacesyntax --example floor_plan -- 0.25
//!
//! The optional argument overrides the connectivity spacing (meters).

use spacesyntax::prelude::*;

fn main() {
    let spacing = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.5);

    // An L-shaped flat with a freestanding column.
    let flat = Polygon::from_xy(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
    ]);
    let column = Polygon::from_xy(&[(0.9, 0.9), (1.1, 0.9), (1.1, 1.1), (0.9, 1.1)]);
    let plan = PolygonSet::new(vec![flat, column]);

    let cfg = AnalysisCfg {
        connectivity_spacing: spacing,
        ..AnalysisCfg::default()
    };
    let bundle = match run_analysis(&plan, &cfg) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("analysis failed: {e}");
            return;
        }
    };

    let stats = plan.polygons[bundle.target].stats();
    println!(
        "target polygon {}: {} vertices, area {:.2} m², perimeter {:.2} m",
        bundle.target, stats.vertices, stats.area, stats.perimeter
    );
    println!(
        "visibility lines: {}, connectivity lines: {}, heat cells: {} (max {})",
        bundle.visibility.len(),
        bundle.connectivity.len(),
        bundle.heat.len(),
        bundle.heat.max_count()
    );
    for m in &bundle.report.metrics {
        println!("{:<16} {:>6.1}  {}", m.metric.label(), m.value, m.band.label());
    }
    println!(
        "{:<16} {:>6.0}  {}",
        "Total",
        bundle.report.total,
        bundle.report.total_band.description()
    );
}
