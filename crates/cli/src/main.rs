mod analysis;
mod provenance;
mod record;
mod store;
mod table;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::analysis::analyze_logged;
use crate::provenance::{Payload, RecordCounts};
use crate::record::read_records;
use crate::store::{Filter, Range, ShapeStore, SortKey};

#[derive(Parser)]
#[command(name = "shapecalc")]
#[command(about = "Analyze rectangle and tetrahedron records")]
struct Cmd {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze every record and optionally write the metrics table
    Analyze {
        #[arg(long)]
        input: PathBuf,
        /// `.csv` or `.parquet`; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print metrics of matching shapes as JSON lines
    Query {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Default)]
struct FilterArgs {
    #[arg(long)]
    area_min: Option<f64>,
    #[arg(long)]
    area_max: Option<f64>,
    #[arg(long)]
    perimeter_min: Option<f64>,
    #[arg(long)]
    perimeter_max: Option<f64>,
    #[arg(long)]
    volume_min: Option<f64>,
    #[arg(long)]
    volume_max: Option<f64>,
    #[arg(long)]
    surface_area_min: Option<f64>,
    #[arg(long)]
    surface_area_max: Option<f64>,
    /// Keep shapes with some vertex at a distance from the origin in range
    #[arg(long)]
    distance_min: Option<f64>,
    #[arg(long)]
    distance_max: Option<f64>,
    /// Keep shapes whose vertices all lie in this quadrant (axes included)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quadrant: Option<u8>,
}

impl FilterArgs {
    fn to_filter(&self) -> Filter {
        fn range(min: Option<f64>, max: Option<f64>) -> Option<Range> {
            (min.is_some() || max.is_some()).then(|| {
                Range::new(min.unwrap_or(f64::NEG_INFINITY), max.unwrap_or(f64::INFINITY))
            })
        }
        let mut all = Vec::new();
        if let Some(r) = range(self.area_min, self.area_max) {
            all.push(Filter::Area(r));
        }
        if let Some(r) = range(self.perimeter_min, self.perimeter_max) {
            all.push(Filter::Perimeter(r));
        }
        if let Some(r) = range(self.volume_min, self.volume_max) {
            all.push(Filter::Volume(r));
        }
        if let Some(r) = range(self.surface_area_min, self.surface_area_max) {
            all.push(Filter::SurfaceArea(r));
        }
        if let Some(r) = range(self.distance_min, self.distance_max) {
            all.push(Filter::Distance(r));
        }
        if let Some(q) = self.quadrant {
            all.push(Filter::Quadrant(q));
        }
        Filter::All(all)
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Analyze { input, out } => analyze(&input, out.as_deref(), cmd.tag),
        Action::Query {
            input,
            filters,
            sort,
        } => query(&input, &filters, sort),
        Action::Report => report(cmd.tag),
    }
}

fn analyze(input: &Path, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "analyze");
    let ingest = read_records(input)?;
    let rows: Vec<_> = ingest.shapes.iter().map(analyze_logged).collect();
    for (label, count) in table::label_counts(&rows)? {
        tracing::info!(label = %label, count, "label_count");
    }
    tracing::info!(
        processed = rows.len(),
        errors = ingest.errors.len(),
        "analysis finished"
    );

    if let Some(out) = out {
        table::write_metrics(out, &rows)?;
        let records = RecordCounts {
            parsed: rows.len(),
            rejected: ingest.errors.len(),
        };
        let params = json!({
            "input": input.to_string_lossy(),
            "errors": ingest.errors,
        });
        let sidecar = provenance::write_sidecar(out, Payload::new(params, tag, records))?;
        tracing::info!(path = %sidecar.display(), "provenance_written");
    }
    Ok(())
}

fn query(input: &Path, filters: &FilterArgs, sort: Option<SortKey>) -> Result<()> {
    let ingest = read_records(input)?;
    let store: ShapeStore = ingest.shapes.into_iter().collect();
    let filter = filters.to_filter();
    let hits: Vec<_> = match sort {
        Some(key) => store
            .sorted(key)
            .into_iter()
            .filter(|s| filter.matches(s, store.metrics(&s.id)))
            .collect(),
        None => store.query(&filter),
    };
    tracing::info!(total = store.len(), matched = hits.len(), "query");
    for shape in hits {
        if let Some(m) = store.metrics(&shape.id) {
            println!("{}", serde_json::to_string(m)?);
        }
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::report_block(tag))?
    );
    Ok(())
}
