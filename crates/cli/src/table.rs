//! Tabular output for analysis rows (CSV or Parquet via polars).

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::analysis::ShapeMetrics;

/// Build one frame row per shape; missing metrics become nulls.
pub fn metrics_frame(rows: &[ShapeMetrics]) -> Result<DataFrame> {
    let col_f = |get: fn(&ShapeMetrics) -> Option<f64>| rows.iter().map(get).collect::<Vec<_>>();
    let col_b = |get: fn(&ShapeMetrics) -> Option<bool>| rows.iter().map(get).collect::<Vec<_>>();
    let df = df!(
        "id" => rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        "name" => rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "kind" => rows.iter().map(|r| r.kind.as_str()).collect::<Vec<_>>(),
        "label" => rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>(),
        "area" => col_f(|r| r.area),
        "perimeter" => col_f(|r| r.perimeter),
        "rectangle" => col_b(|r| r.rectangle),
        "square" => col_b(|r| r.square),
        "rhombus" => col_b(|r| r.rhombus),
        "trapezoid" => col_b(|r| r.trapezoid),
        "convex" => col_b(|r| r.convex),
        "volume" => col_f(|r| r.volume),
        "surface_area" => col_f(|r| r.surface_area),
        "valid_tetrahedron" => col_b(|r| r.valid_tetrahedron),
        "base_plane" => rows.iter().map(|r| r.base_plane.clone()).collect::<Vec<_>>(),
        "above_plane" => col_f(|r| r.above_plane),
        "below_plane" => col_f(|r| r.below_plane)
    )?;
    Ok(df)
}

/// Write rows to `path`; `.parquet` selects Parquet, anything else CSV.
pub fn write_metrics(path: &Path, rows: &[ShapeMetrics]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = metrics_frame(rows)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(&mut file)
            .finish(&mut df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    tracing::info!(rows = df.height(), cols = df.width(), path = %path.display(), "metrics_written");
    Ok(())
}

/// Count rows per label, sorted by label.
pub fn label_counts(rows: &[ShapeMetrics]) -> Result<Vec<(String, u64)>> {
    let counts = metrics_frame(rows)?
        .lazy()
        .group_by([col("label")])
        .agg([len().cast(DataType::UInt64).alias("count")])
        .sort(["label"], SortMultipleOptions::default())
        .collect()?;
    let labels = counts.column("label")?.str()?;
    let n = counts.column("count")?.u64()?;
    Ok(labels
        .into_iter()
        .zip(n)
        .filter_map(|(l, c)| Some((l?.to_string(), c?)))
        .collect())
}
