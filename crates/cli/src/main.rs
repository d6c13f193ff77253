use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polygons::{Polygon, PolygonSequence};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polygons-cli")]
#[command(about = "Tables and summaries for regular polygon sequences")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct SequenceArgs {
    /// Largest vertex count in the sequence (>= 3)
    #[arg(long, default_value_t = 10)]
    max_edges: usize,
    /// Shared circumradius (> 0)
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Emit one row per member; JSON to stdout, or to --out with a provenance sidecar
    Table {
        #[command(flatten)]
        seq: SequenceArgs,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the member with the largest area/perimeter ratio
    Best {
        #[command(flatten)]
        seq: SequenceArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Derived properties of one member, as written by `table`.
#[derive(Serialize)]
struct PolygonRow {
    vertices: usize,
    circumradius: f64,
    interior_angle: f64,
    side_length: f64,
    apothem: f64,
    area: f64,
    perimeter: f64,
    efficiency: f64,
}

impl From<&Polygon> for PolygonRow {
    fn from(p: &Polygon) -> Self {
        Self {
            vertices: p.count_vertices(),
            circumradius: p.circumradius(),
            interior_angle: p.interior_angle(),
            side_length: p.side_length(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            efficiency: p.efficiency(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Table { seq, out } => table(seq, out),
        Action::Best { seq } => best(seq),
        Action::Report => report(),
    }
}

fn build(args: &SequenceArgs) -> Result<PolygonSequence> {
    PolygonSequence::new(args.max_edges, args.radius).with_context(|| {
        format!(
            "building sequence with max_edges={} radius={}",
            args.max_edges, args.radius
        )
    })
}

fn table(args: SequenceArgs, out: Option<String>) -> Result<()> {
    let seq = build(&args)?;
    tracing::info!(max_edges = seq.max_edges(), radius = seq.circumradius(), len = seq.len(), out = ?out, "table");
    let rows: Vec<PolygonRow> = seq.iter().map(PolygonRow::from).collect();

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    };

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(
        "table",
        serde_json::json!({
            "max_edges": args.max_edges,
            "radius": args.radius
        }),
    );
    let prov_path = write_sidecar(out_path, payload)?;
    tracing::info!(rows = rows.len(), provenance = %prov_path.display(), "table_written");
    Ok(())
}

fn best(args: SequenceArgs) -> Result<()> {
    let seq = build(&args)?;
    let p = seq.max_efficiency_polygon();
    tracing::info!(sequence = %seq, best = %p, efficiency = p.efficiency(), "best");
    println!("{}", serde_json::to_string_pretty(&PolygonRow::from(p))?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(&Payload::new("report", serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
