//! Hands the QUBO to an external program, typically the vendor's own client, and reads its
//! answer back.
//!
//! The request goes to the child's stdin as JSON and the response is read from its stdout. The
//! service token reaches the child only through its environment.

use crate::credentials::{Credentials, TOKEN_ENV_VAR};
use crate::error::{ItineraryError, Result};
use crate::sampler::{SampleRecord, SampleSet, Sampler, SamplerParams};
use crate::sparse_encoder::QuboMapping;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// JSON body written to the sampler program
#[derive(Debug, Serialize)]
pub struct SampleRequest {
    /// `[row, col, value]` triples with `row <= col`
    pub qubo: Vec<(usize, usize, f64)>,
    pub num_reads: usize,
    pub chain_strength: f64,
    pub annealing_time: f64,
}

impl SampleRequest {
    pub fn new(mapping: &QuboMapping, params: &SamplerParams) -> Self {
        Self {
            qubo: mapping.to_triples(),
            num_reads: params.num_reads,
            chain_strength: params.chain_strength,
            annealing_time: params.annealing_time,
        }
    }
}

/// JSON body expected back from the sampler program
#[derive(Debug, Deserialize)]
pub struct SampleResponse {
    pub records: Vec<SampleRecord>,
}

pub struct CommandSampler {
    program: String,
    args: Vec<String>,
    credentials: Credentials,
}

impl CommandSampler {
    pub fn new(program: impl Into<String>, args: Vec<String>, credentials: Credentials) -> Self {
        Self {
            program: program.into(),
            args,
            credentials,
        }
    }

    fn parse_response(stdout: &[u8]) -> Result<SampleSet> {
        let response: SampleResponse = serde_json::from_slice(stdout)?;

        if let Some(bad) = response
            .records
            .iter()
            .flat_map(|r| r.sample.values())
            .find(|v| **v > 1)
        {
            return Err(ItineraryError::InvalidResponse(format!(
                "sample value {bad} is not binary"
            )));
        }

        Ok(SampleSet::aggregate(response.records))
    }
}

impl Sampler for CommandSampler {
    fn name(&self) -> &str {
        &self.program
    }

    fn sample(&self, mapping: &QuboMapping, params: &SamplerParams) -> Result<SampleSet> {
        let request = SampleRequest::new(mapping, params);
        let body = serde_json::to_vec(&request)?;

        info!(
            "submitting {} coefficients to '{}' with num_reads={}",
            request.qubo.len(),
            self.program,
            params.num_reads
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(TOKEN_ENV_VAR, self.credentials.token())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // a program may answer without reading the request, its exit status decides
            match stdin.write_all(&body) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("'{}' closed stdin before reading the request", self.program);
                }
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ItineraryError::SamplerFailed {
                command: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("sampler wrote {} bytes", output.stdout.len());
        Self::parse_response(&output.stdout)
    }
}
