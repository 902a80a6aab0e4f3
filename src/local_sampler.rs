//! In process stand in for the remote annealer.
//!
//! Each read starts from a random binary point and runs one flip local search to a local minimum.
//! Reads are independent and run on the rayon pool; the result only depends on the seed.

use crate::error::Result;
use crate::initial_points::generate_random_binary_points;
use crate::local_search::multi_simple_local_search;
use crate::qubo::Qubo;
use crate::sampler::{SampleRecord, SampleSet, Sampler, SamplerParams};
use crate::sparse_encoder::QuboMapping;
use log::debug;

pub struct LocalSampler {
    pub seed: u64,
    pub max_steps: usize,
}

impl LocalSampler {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            max_steps: usize::MAX,
        }
    }
}

impl Sampler for LocalSampler {
    fn name(&self) -> &str {
        "local-search"
    }

    fn sample(&self, mapping: &QuboMapping, params: &SamplerParams) -> Result<SampleSet> {
        // no embedding happens in process
        debug!(
            "ignoring chain_strength={} annealing_time={}",
            params.chain_strength, params.annealing_time
        );

        let qubo = Qubo::from_mapping(mapping);
        let starts = generate_random_binary_points(qubo.num_x(), params.num_reads, self.seed);
        let local_sols = multi_simple_local_search(&qubo, &starts, self.max_steps);

        let records = local_sols
            .iter()
            .map(|x| SampleRecord {
                sample: x.iter().map(|v| *v as u8).enumerate().collect(),
                energy: qubo.eval_usize(x),
                num_occurrences: 1,
            })
            .collect();

        Ok(SampleSet::aggregate(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_builder::build_qubo_matrix;
    use crate::problem::{DistanceTable, ScheduleProblem};
    use crate::sparse_encoder::encode;

    fn mapping(n_cities: usize, n_days: usize) -> QuboMapping {
        let p = ScheduleProblem::new(n_cities, n_days, 500.0, DistanceTable::example());
        encode(&build_qubo_matrix(&p)).unwrap()
    }

    fn params(num_reads: usize) -> SamplerParams {
        SamplerParams {
            num_reads,
            ..SamplerParams::default()
        }
    }

    #[test]
    fn test_finds_minimum_of_two_by_two() {
        let m = mapping(2, 2);
        let set = LocalSampler::new(0).sample(&m, &params(200)).unwrap();

        let best = set.first().unwrap();
        assert_eq!(best.energy, 0.0);
        assert_eq!(best.values(), vec![0, 0, 0, 0]);
        assert_eq!(set.total_reads(), 200);
    }

    #[test]
    fn test_energies_match_mapping() {
        let m = mapping(4, 3);
        let set = LocalSampler::new(7).sample(&m, &params(50)).unwrap();

        for r in set.records() {
            assert_eq!(r.energy, m.energy(&r.dense(12)));
            assert_eq!(r.sample.len(), 12);
        }
        assert_eq!(set.total_reads(), 50);
    }

    #[test]
    fn test_same_seed_same_samples() {
        let m = mapping(4, 3);
        let a = LocalSampler::new(3).sample(&m, &params(40)).unwrap();
        let b = LocalSampler::new(3).sample(&m, &params(40)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_reads() {
        let m = mapping(2, 2);
        let set = LocalSampler::new(0).sample(&m, &params(0)).unwrap();
        assert!(set.is_empty());
    }
}
