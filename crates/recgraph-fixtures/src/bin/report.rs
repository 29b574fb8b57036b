//! Example corpus CLI.
//!
//! Generates the example corpus the recommendation algorithm will consume
//! (debug progress on, scale 1000) and prints a summary of its shape.
//!
//! # Usage
//!
//! ```bash
//! # Generate the example corpus and print a text summary
//! cargo run -p recgraph-fixtures --bin fixture-report
//!
//! # A different scale and seed, summarized as JSON
//! cargo run -p recgraph-fixtures --bin fixture-report -- --scale 2000 --seed 7 --json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recgraph_fixtures::{DatasetGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(
    name = "fixture-report",
    about = "Generate a synthetic recommendation corpus and report its shape"
)]
struct Args {
    /// Scale factor; out-of-range values fall back to the default scale.
    #[arg(long, default_value_t = 1000)]
    scale: i64,

    /// Seed for the corpus RNG.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Suppress per-phase progress events.
    #[arg(long)]
    quiet: bool,

    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GeneratorConfig {
        debug: !args.quiet,
        scale: args.scale,
        seed: args.seed,
    };
    let dataset = DatasetGenerator::with_config(config).generate();
    let summary = dataset.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
