//! Apollonian gasket generator
//!
//! Usage: `gasket [LEVELS] [SPLIT_RATIO]`
//!
//! Expands a gasket by LEVELS levels (default 5) from a seed whose inner
//! circles have radii SPLIT_RATIO and 1 - SPLIT_RATIO (default 0.5), then
//! prints per-level statistics. Tolerances come from `GASKET_*` environment
//! variables; log verbosity from `RUST_LOG`.

use std::env;

use gasket_core::{color_for, Gasket, GasketConfig, Seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LEVELS: i64 = 5;
const DEFAULT_SPLIT: f64 = 0.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gasket=info,gasket_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let levels: i64 = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("LEVELS must be an integer, got {raw:?}"))?,
        None => DEFAULT_LEVELS,
    };

    let split: f64 = match args.get(2) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("SPLIT_RATIO must be a number, got {raw:?}"))?,
        None => DEFAULT_SPLIT,
    };

    let config = GasketConfig::from_env()?;
    let seed = Seed::split(split)?;
    tracing::debug!("Using {:?}", config);

    let mut gasket = Gasket::with_config(seed, config)?;

    println!("Apollonian Gasket");
    println!("=================");
    println!();
    println!("Seed circles:");
    for circle in gasket.circles() {
        println!("  {}", circle);
    }
    println!();
    println!("Expanding {} levels...", levels);

    let report = gasket.generate(levels)?;

    println!();
    println!(
        "{:>5} {:>10} {:>10} {:>9} {:>10} {:>12}  color",
        "level", "triangles", "candidates", "accepted", "duplicate", "not tangent"
    );
    for stats in &report.levels {
        let [r, g, b] = color_for(stats.level).to_array();
        println!(
            "{:>5} {:>10} {:>10} {:>9} {:>10} {:>12}  ({:.1}, {:.1}, {:.1})",
            stats.level,
            stats.triangles,
            stats.candidates,
            stats.accepted,
            stats.duplicate,
            stats.not_tangent,
            r,
            g,
            b
        );
    }

    let smallest = gasket
        .circles()
        .iter()
        .map(|c| c.radius)
        .fold(f64::INFINITY, f64::min);

    println!();
    println!("Generation complete:");
    println!("  Levels: {}", gasket.depth());
    println!("  Candidates evaluated: {}", gasket.candidates_evaluated());
    println!("  Circles: {}", gasket.circles().len());
    println!("  Open triangles: {}", gasket.queue().len());
    println!("  Smallest radius: {:.6e}", smallest);

    Ok(())
}
