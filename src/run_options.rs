use crate::error::{ItineraryError, Result};
use crate::problem::ScheduleProblem;
use crate::sampler::SamplerParams;
use std::path::PathBuf;

/// Which sampler answers the QUBO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerSelection {
    Local,
    Command,
}

/// Options for a single build, checkpoint and sample run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub problem: ScheduleProblem,
    pub checkpoint_path: PathBuf,
    pub results_path: PathBuf,
    pub sampler_params: SamplerParams,
    pub sampler: SamplerSelection,
    pub command: Option<String>,
    pub command_args: Vec<String>,
    pub seed: u64,
}

impl RunOptions {
    pub fn new() -> Self {
        Self {
            problem: ScheduleProblem::example(),
            checkpoint_path: PathBuf::from("qubomatrix.txt"),
            results_path: PathBuf::from("results.txt"),
            sampler_params: SamplerParams::default(),
            sampler: SamplerSelection::Local,
            command: None,
            command_args: Vec::new(),
            seed: 0,
        }
    }

    /// Selects the sampler by name.
    ///
    /// # Errors
    ///
    /// Returns an error for a name other than `local` or `command`, leaving the selection unchanged.
    pub fn set_sampler(&mut self, sampler: Option<String>) -> Result<()> {
        if let Some(s) = sampler {
            self.sampler = match s.as_str() {
                "local" => SamplerSelection::Local,
                "command" => SamplerSelection::Command,
                _ => return Err(ItineraryError::UnknownSampler(s)),
            };
        }
        Ok(())
    }

    /// Sets the external sampler program from its argv, the first entry is the program
    pub fn set_command(&mut self, command: Vec<String>) {
        let mut argv = command.into_iter();
        if let Some(program) = argv.next() {
            self.command = Some(program);
            self.command_args = argv.collect();
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}
