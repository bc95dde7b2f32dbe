use std::path::PathBuf;

use clap::Parser;
use country_paths::graphs::{graph_factory::GraphFactory, graph_functions::random_dataset};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Writes a dataset of randomly connected countries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of countries
    #[arg(short, long)]
    countries: u32,
    /// Number of connection records to draw
    #[arg(short = 'm', long)]
    connections: u32,
    /// Path where the dataset will be saved, `.json`
    #[arg(short, long)]
    out: PathBuf,
    /// Seed of the random number generator
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let dataset = random_dataset(&mut rng, args.countries, args.connections);
    GraphFactory::write_dataset(&args.out, &dataset)?;
    info!(
        "wrote {} countries and {} connections",
        dataset.countries.len(),
        dataset.connections.len()
    );

    Ok(())
}
