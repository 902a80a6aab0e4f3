use clap::Parser;
use itinerary_qubo::pipeline::{make_sampler, run};
use itinerary_qubo::problem::{DistanceTable, ScheduleProblem};
use itinerary_qubo::run_options::RunOptions;
use itinerary_qubo::Result;
use log::error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "itinerary-qubo",
    about = "Builds the city visiting schedule QUBO and samples it",
    version
)]
struct Args {
    /// Number of cities
    #[arg(long, default_value_t = 4)]
    cities: usize,

    /// Number of days
    #[arg(long, default_value_t = 3)]
    days: usize,

    /// Weight of each constraint violation
    #[arg(long, default_value_t = 500.0)]
    penalty: f64,

    /// JSON file of [city_a, city_b, cost] triples, defaults to the four city example table
    #[arg(long, value_name = "FILE")]
    distances: Option<PathBuf>,

    /// Matrix checkpoint file
    #[arg(long, default_value = "qubomatrix.txt")]
    checkpoint: PathBuf,

    /// Results file
    #[arg(long, default_value = "results.txt")]
    results: PathBuf,

    /// Number of reads requested from the sampler
    #[arg(long, default_value_t = 1000)]
    num_reads: usize,

    #[arg(long, default_value_t = 2.0)]
    chain_strength: f64,

    /// Annealing time in microseconds
    #[arg(long, default_value_t = 20.0)]
    annealing_time: f64,

    /// Sampler to use
    #[arg(long, default_value = "local", value_parser = ["local", "command"])]
    sampler: String,

    /// Seed of the local sampler
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Program run by the command sampler and its arguments, given after `--`
    #[arg(last = true, value_name = "PROGRAM")]
    command: Vec<String>,
}

fn build_options(args: Args) -> Result<RunOptions> {
    let distances = match &args.distances {
        Some(path) => DistanceTable::from_json_file(path)?,
        None => DistanceTable::example(),
    };

    let mut options = RunOptions::new();
    options.problem = ScheduleProblem::new(args.cities, args.days, args.penalty, distances);
    options.checkpoint_path = args.checkpoint;
    options.results_path = args.results;
    options.sampler_params.num_reads = args.num_reads;
    options.sampler_params.chain_strength = args.chain_strength;
    options.sampler_params.annealing_time = args.annealing_time;
    options.seed = args.seed;
    options.set_sampler(Some(args.sampler))?;
    options.set_command(args.command);

    Ok(options)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let outcome = build_options(args).and_then(|options| {
        let sampler = make_sampler(&options)?;
        run(&options, sampler.as_ref())
    });

    if let Err(e) = outcome {
        error!("{e}");
        std::process::exit(1);
    }
}
