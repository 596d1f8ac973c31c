mod plan;
mod provenance;
mod tables;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use spacesyntax::api::{
    analyze_complex_connections, analyze_connectivity, analyze_visibility, build_heatmap,
    run_analysis, target_polygon,
};
use spacesyntax::cfg::AnalysisCfg;
use spacesyntax::lines::{LineKind, LineSet};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "ssn")]
#[command(about = "Space-syntax analysis of floor plans")]
struct Cmd {
    /// JSON file with analysis settings; flags override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log per-stage counts
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Per-polygon vertex count, perimeter, area and centroid
    Stats {
        #[arg(long)]
        input: PathBuf,
    },
    /// Build a line set over the largest polygon and write it as a table
    Lines {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = KindArg::Visibility)]
        kind: KindArg,
        /// Sampling spacing in meters (defaults per kind from the config)
        #[arg(long)]
        spacing: Option<f64>,
        /// Connectivity reach in meters
        #[arg(long)]
        max_dist: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Aggregate visibility lines into a heat field (.csv or .parquet)
    Heatmap {
        #[arg(long)]
        input: PathBuf,
        /// Visibility sampling spacing in meters
        #[arg(long)]
        spacing: Option<f64>,
        /// Heat cell side in meters
        #[arg(long)]
        cell: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the whole pipeline and print the score table
    Score {
        #[arg(long)]
        input: PathBuf,
        /// Also write the report as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Visibility,
    Connectivity,
    Complex,
}

impl From<KindArg> for LineKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Visibility => LineKind::Visibility,
            KindArg::Connectivity => LineKind::Connectivity,
            KindArg::Complex => LineKind::Complex,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = load_cfg(cmd.config.as_deref())?;
    match cmd.action {
        Action::Stats { input } => stats(&input),
        Action::Lines {
            input,
            kind,
            spacing,
            max_dist,
            out,
        } => lines(&input, kind.into(), spacing, max_dist, &out, cfg),
        Action::Heatmap {
            input,
            spacing,
            cell,
            out,
        } => heatmap(&input, spacing, cell, &out, cfg),
        Action::Score { input, out } => score(&input, out.as_deref(), &cfg),
        Action::Report => report(),
    }
}

fn load_cfg(path: Option<&Path>) -> Result<AnalysisCfg> {
    let Some(path) = path else {
        return Ok(AnalysisCfg::default());
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AnalysisCfg = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn stats(input: &Path) -> Result<()> {
    let plan = plan::load_plan(input)?;
    let largest = plan.largest_index();
    println!("{} polygon(s)", plan.len());
    for (i, poly) in plan.iter().enumerate() {
        let s = poly.stats();
        let mark = if Some(i) == largest { " (largest)" } else { "" };
        let centroid = s
            .centroid
            .map_or_else(|| "-".to_string(), |(x, y)| format!("({x:.2}, {y:.2})"));
        println!(
            "#{i}{mark}: {} vertices, perimeter {:.2} m, area {:.2} m², centroid {centroid}",
            s.vertices, s.perimeter, s.area
        );
    }
    Ok(())
}

fn lines(
    input: &Path,
    kind: LineKind,
    spacing: Option<f64>,
    max_dist: Option<f64>,
    out: &Path,
    mut cfg: AnalysisCfg,
) -> Result<()> {
    let plan = plan::load_plan(input)?;
    if let Some(d) = max_dist {
        cfg.connectivity_max_dist = d;
    }
    let (spacing, set): (f64, LineSet) = match kind {
        LineKind::Visibility => {
            let s = spacing.unwrap_or(cfg.visibility_spacing);
            (s, analyze_visibility(&plan, s)?)
        }
        LineKind::Connectivity => {
            let s = spacing.unwrap_or(cfg.connectivity_spacing);
            (s, analyze_connectivity(&plan, s, cfg.connectivity_max_dist)?)
        }
        LineKind::Complex => {
            let s = spacing.unwrap_or(cfg.complex_spacing);
            (s, analyze_complex_connections(&plan, s)?)
        }
    };
    tracing::info!(kind = kind.as_str(), spacing, lines = set.len(), "lines");
    let mut df = tables::lines_frame(&set)?;
    tables::write_frame(&mut df, out)?;
    let mut params = json!({ "kind": kind.as_str(), "spacing": spacing });
    if kind == LineKind::Connectivity {
        params["max_dist"] = json!(cfg.connectivity_max_dist);
    }
    write_sidecar(out, &Payload::new("lines", params).with_input(input))?;
    Ok(())
}

fn heatmap(
    input: &Path,
    spacing: Option<f64>,
    cell: Option<f64>,
    out: &Path,
    cfg: AnalysisCfg,
) -> Result<()> {
    let plan = plan::load_plan(input)?;
    let spacing = spacing.unwrap_or(cfg.visibility_spacing);
    let cell = cell.unwrap_or(cfg.heat_cell_spacing);
    let vis = analyze_visibility(&plan, spacing)?;
    let field = build_heatmap(target_polygon(&plan)?, &vis, cell)?;
    tracing::info!(cells = field.len(), max_count = field.max_count(), "heatmap");
    let mut df = tables::heat_frame(&field)?;
    tables::write_frame(&mut df, out)?;
    let params = json!({ "visibility_spacing": spacing, "cell_spacing": cell });
    write_sidecar(out, &Payload::new("heatmap", params).with_input(input))?;
    Ok(())
}

fn score(input: &Path, out: Option<&Path>, cfg: &AnalysisCfg) -> Result<()> {
    let plan = plan::load_plan(input)?;
    let bundle = run_analysis(&plan, cfg)?;
    let report = &bundle.report;
    for m in &report.metrics {
        println!(
            "{:<16} {:>6.1}  {:<10} {}",
            m.metric.label(),
            m.value,
            m.band.label(),
            m.metric.definition()
        );
    }
    println!("{:<16} {:>6.0}  {}", "Total", report.total, report.total_band.description());

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let doc = json!({ "target": bundle.target, "report": report });
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(
            out,
            &Payload::new("score", serde_json::to_value(cfg)?).with_input(input),
        )?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = Payload::new("report", json!({})).document(&[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
