//! Tabular exports of line sets and heat fields.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use spacesyntax::heatmap::HeatField;
use spacesyntax::lines::LineSet;
use std::fs::{self, File};
use std::path::Path;

/// One row per segment: `x1, y1, x2, y2, length`.
pub fn lines_frame(lines: &LineSet) -> PolarsResult<DataFrame> {
    let n = lines.len();
    let (mut x1, mut y1, mut x2, mut y2, mut len) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for s in lines {
        x1.push(s.a.x);
        y1.push(s.a.y);
        x2.push(s.b.x);
        y2.push(s.b.y);
        len.push(s.length());
    }
    df!("x1" => x1, "y1" => y1, "x2" => x2, "y2" => y2, "length" => len)
}

/// One row per registered cell: origin `x, y`, `count`, `percentage`.
pub fn heat_frame(field: &HeatField) -> PolarsResult<DataFrame> {
    let cells = field.cells();
    df!(
        "x" => cells.iter().map(|c| c.x).collect::<Vec<_>>(),
        "y" => cells.iter().map(|c| c.y).collect::<Vec<_>>(),
        "count" => cells.iter().map(|c| c.count).collect::<Vec<_>>(),
        "percentage" => cells.iter().map(|c| c.percentage).collect::<Vec<_>>()
    )
}

/// Write `df` as CSV or Parquet, chosen by the extension of `path`.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "csv" && ext != "parquet" {
        bail!("unsupported output {}: expected .csv or .parquet", path.display());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == "csv" {
        CsvWriter::new(file).finish(df)?;
    } else {
        ParquetWriter::new(file).finish(df)?;
    }
    tracing::info!(rows = df.height(), out = %path.display(), "table written");
    Ok(())
}
