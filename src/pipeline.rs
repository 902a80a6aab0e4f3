//! Runs the whole job in order: build the matrix, checkpoint and reload it, encode it, sample it
//! and write the results.

use crate::checkpoint::{read_matrix, write_matrix};
use crate::command_sampler::CommandSampler;
use crate::credentials::Credentials;
use crate::error::{ItineraryError, Result};
use crate::local_sampler::LocalSampler;
use crate::matrix_builder::build_qubo_matrix;
use crate::results::write_results;
use crate::run_options::{RunOptions, SamplerSelection};
use crate::sampler::{SampleSet, Sampler};
use crate::schedule::Schedule;
use crate::sparse_encoder::{encode, QuboMapping};
use log::{debug, info, warn};

/// What a run produced, besides the files it wrote
pub struct RunReport {
    pub mapping: QuboMapping,
    pub samples: SampleSet,
    pub schedule: Schedule,
}

/// Builds the sampler chosen in the options.
///
/// # Errors
///
/// The command sampler needs a program and a token from the environment.
pub fn make_sampler(options: &RunOptions) -> Result<Box<dyn Sampler>> {
    match options.sampler {
        SamplerSelection::Local => Ok(Box::new(LocalSampler::new(options.seed))),
        SamplerSelection::Command => {
            let program = options
                .command
                .clone()
                .ok_or(ItineraryError::MissingCommand)?;
            let credentials = Credentials::from_env()?;
            Ok(Box::new(CommandSampler::new(
                program,
                options.command_args.clone(),
                credentials,
            )))
        }
    }
}

/// Runs the pipeline against the given sampler.
///
/// # Errors
///
/// Any failure to write or reload the checkpoint, to sample, or to write the results aborts the
/// run, nothing is retried.
pub fn run(options: &RunOptions, sampler: &dyn Sampler) -> Result<RunReport> {
    let problem = &options.problem;

    let qubo_matrix = build_qubo_matrix(problem);
    write_matrix(&options.checkpoint_path, &qubo_matrix)?;
    info!(
        "QUBO matrix ({} cities x {} days) saved to {}",
        problem.n_cities,
        problem.n_days,
        options.checkpoint_path.display()
    );

    let reloaded = read_matrix(&options.checkpoint_path)?;
    debug!("reloaded QUBO matrix:\n{reloaded}");

    let mapping = encode(&reloaded)?;
    info!(
        "QUBO mapping has {} linear and {} quadratic terms",
        mapping.linear().count(),
        mapping.quadratic().count()
    );
    debug!("QUBO mapping: {:?}", mapping.to_triples());

    info!(
        "sampling with {} (num_reads={}, chain_strength={}, annealing_time={})",
        sampler.name(),
        options.sampler_params.num_reads,
        options.sampler_params.chain_strength,
        options.sampler_params.annealing_time
    );
    let samples = sampler.sample(&mapping, &options.sampler_params)?;
    info!(
        "received {} distinct samples over {} reads",
        samples.len(),
        samples.total_reads()
    );

    let best = samples.best()?;
    info!("best solution: {:?}", best.values());
    info!("total cost (energy): {}", best.energy);

    let schedule = Schedule::decode(problem, &best.dense(mapping.num_x()));
    match schedule.is_feasible() {
        true => info!("itinerary: {schedule}"),
        false => warn!(
            "best sample breaks {} constraints: {schedule}",
            schedule.violations.len()
        ),
    }

    write_results(&options.results_path, &samples)?;
    info!("results saved to {}", options.results_path.display());

    Ok(RunReport {
        mapping,
        samples,
        schedule,
    })
}
