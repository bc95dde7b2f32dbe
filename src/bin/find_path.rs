use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use country_paths::{
    graphs::graph_factory::GraphFactory,
    routing::{CountryRouter, RouterConfig, DEFAULT_ORIGIN},
};
use tracing::error;

/// Prints the shortest sequence of countries from the origin to a destination
/// as a JSON list of names.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset of countries and connections in `.json` format
    #[arg(short, long)]
    dataset: PathBuf,
    /// Name of the destination country
    #[arg(short = 't', long)]
    destination: String,
    /// Name of the country every path starts at
    #[arg(short, long, default_value = DEFAULT_ORIGIN)]
    origin: String,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let dataset = GraphFactory::dataset_from_file(&args.dataset)?;
    let router = CountryRouter::new(RouterConfig {
        origin: args.origin,
    });

    match router.route(&dataset, &args.destination) {
        Ok(names) => {
            println!("{}", serde_json::to_string(&names)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{}", err);
            println!("{}", serde_json::json!({ "message": err.to_string() }));
            Ok(ExitCode::FAILURE)
        }
    }
}
