use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::bail;
use clap::Parser;
use country_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::validate_path},
    search::{dijkstra::Dijkstra, path::ShortestPathTestCase, PathFinding},
    utility::{get_progressbar_long_jobs, get_progressspinner},
};
use indicatif::ProgressIterator;
use tracing::info;

/// Runs every test case against the dataset, validates the returned paths and
/// reports the average query time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset of countries and connections in `.json` format
    #[arg(short, long)]
    dataset: PathBuf,
    /// Test cases as written by `create_tests`
    #[arg(short, long)]
    tests: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let spinner = get_progressspinner("Reading dataset");
    let graph = GraphFactory::from_file(&args.dataset)?;
    spinner.finish_and_clear();
    let dijkstra = Dijkstra::new(&graph);

    let reader = BufReader::new(File::open(&args.tests)?);
    let test_cases: Vec<ShortestPathTestCase> = serde_json::from_reader(reader)?;

    let bar = get_progressbar_long_jobs("Validating", test_cases.len() as u64);
    let mut times = Vec::with_capacity(test_cases.len());
    for test_case in test_cases.iter().progress_with(bar) {
        let start = Instant::now();
        let path = dijkstra.shortest_path(&test_case.request);
        times.push(start.elapsed());

        if let Err(err) = validate_path(&graph, test_case, &path) {
            bail!(
                "{} -> {} wrong: {}",
                test_case.request.source(),
                test_case.request.destination(),
                err
            );
        }
    }

    if !times.is_empty() {
        let average = times.iter().sum::<Duration>() / times.len() as u32;
        info!("all {} paths valid, average query time {:?}", times.len(), average);
    }

    Ok(())
}
