//! The narrow interface to whatever samples the QUBO, and the shape of what comes back.
//!
//! A sampler receives the sparse mapping plus tuning parameters and answers with a set of
//! records, each holding a binary assignment, its energy and how often it was read.

use crate::error::{ItineraryError, Result};
use crate::sparse_encoder::QuboMapping;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of reads requested from the sampler
pub const DEFAULT_NUM_READS: usize = 1000;

/// Default chain strength for embedded samplers
pub const DEFAULT_CHAIN_STRENGTH: f64 = 2.0;

/// Default annealing time in microseconds
pub const DEFAULT_ANNEALING_TIME: f64 = 20.0;

/// Tuning parameters passed along with each submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    pub num_reads: usize,
    pub chain_strength: f64,
    /// Microseconds
    pub annealing_time: f64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            num_reads: DEFAULT_NUM_READS,
            chain_strength: DEFAULT_CHAIN_STRENGTH,
            annealing_time: DEFAULT_ANNEALING_TIME,
        }
    }
}

/// One distinct assignment returned by a sampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub sample: BTreeMap<usize, u8>,
    pub energy: f64,
    pub num_occurrences: usize,
}

impl SampleRecord {
    /// Assignment values ordered by variable index
    pub fn values(&self) -> Vec<u8> {
        self.sample.values().copied().collect()
    }

    /// Assignment as a dense vector of length `num_x`, missing variables read as 0
    pub fn dense(&self, num_x: usize) -> Vec<usize> {
        let mut x = vec![0; num_x];
        for (&i, &v) in &self.sample {
            if i < num_x {
                x[i] = usize::from(v);
            }
        }
        x
    }
}

/// Records sorted by ascending energy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    records: Vec<SampleRecord>,
}

impl SampleSet {
    /// Merges records with identical assignments and sorts by energy, lowest first.
    ///
    /// Ties in energy keep the order in which assignments were first seen.
    pub fn aggregate(records: Vec<SampleRecord>) -> Self {
        let mut merged: Vec<SampleRecord> = Vec::new();
        let mut positions: BTreeMap<BTreeMap<usize, u8>, usize> = BTreeMap::new();

        for record in records {
            match positions.get(&record.sample) {
                Some(&k) => merged[k].num_occurrences += record.num_occurrences,
                None => {
                    positions.insert(record.sample.clone(), merged.len());
                    merged.push(record);
                }
            }
        }

        merged.sort_by(|a, b| a.energy.total_cmp(&b.energy));
        Self { records: merged }
    }

    /// Lowest energy record
    pub fn first(&self) -> Option<&SampleRecord> {
        self.records.first()
    }

    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of reads across every record
    pub fn total_reads(&self) -> usize {
        self.records.iter().map(|r| r.num_occurrences).sum()
    }

    /// Same as `first`, but an empty set is an error
    pub fn best(&self) -> Result<&SampleRecord> {
        self.first().ok_or(ItineraryError::EmptySampleSet)
    }
}

/// Anything that can sample a QUBO mapping
pub trait Sampler {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Samples the QUBO, blocking until the sampler answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampler cannot be reached or answers with something unusable.
    fn sample(&self, mapping: &QuboMapping, params: &SamplerParams) -> Result<SampleSet>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bits: &[u8], energy: f64, count: usize) -> SampleRecord {
        SampleRecord {
            sample: bits.iter().copied().enumerate().collect(),
            energy,
            num_occurrences: count,
        }
    }

    #[test]
    fn test_default_params() {
        let params = SamplerParams::default();
        assert_eq!(params.num_reads, 1000);
        assert_eq!(params.chain_strength, 2.0);
        assert_eq!(params.annealing_time, 20.0);
    }

    #[test]
    fn test_aggregate_merges_and_sorts() {
        let set = SampleSet::aggregate(vec![
            record(&[1, 0], 5.0, 1),
            record(&[0, 0], 0.0, 2),
            record(&[1, 0], 5.0, 3),
            record(&[0, 1], -1.0, 1),
        ]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.total_reads(), 7);
        assert_eq!(set.first().unwrap().values(), vec![0, 1]);
        let energies: Vec<f64> = set.records().iter().map(|r| r.energy).collect();
        assert_eq!(energies, vec![-1.0, 0.0, 5.0]);
        assert_eq!(set.records()[2].num_occurrences, 4);
    }

    #[test]
    fn test_empty_set() {
        let set = SampleSet::aggregate(Vec::new());
        assert!(set.first().is_none());
        assert!(matches!(set.best(), Err(ItineraryError::EmptySampleSet)));
    }

    #[test]
    fn test_dense_assignment() {
        let mut r = record(&[1, 0, 1], 0.0, 1);
        r.sample.remove(&1);
        assert_eq!(r.dense(4), vec![1, 0, 1, 0]);
    }
}
