//! # Local Search over binary points
//!
//! This module contains the one flip local search used by the in process sampler:
//! - One step local search
//! - Simple local search
//! - Multi simple local search

use crate::qubo::Qubo;
use ndarray::Array1;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Performs a single step of local search, which is to say that it will flip a single bit and return the best solution out of all
/// of the possible bit flips. Returns the original point if no flip improves the objective.
///
/// This takes O(|Q|) + O(n) time, where |Q| is the number of non-zero elements in the QUBO matrix.
pub fn one_step_local_search(qubo: &Qubo, x_0: &Array1<usize>) -> Array1<usize> {
    let deltas = qubo.one_flip_deltas(x_0);

    let best_neighbor = deltas
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b));

    match best_neighbor {
        Some((i, delta)) if *delta < 0.0f64 => {
            let mut x_1 = x_0.clone();
            x_1[i] = 1 - x_1[i];
            x_1
        }
        _ => x_0.clone(),
    }
}

/// Given a QUBO and an integral initial point, run simple local search until the point converges or the step limit is hit.
pub fn simple_local_search(qubo: &Qubo, x_0: &Array1<usize>, max_steps: usize) -> Array1<usize> {
    let mut x = x_0.clone();
    let mut x_1 = one_step_local_search(qubo, &x);
    let mut steps = 0;

    while x_1 != x && steps < max_steps {
        x = x_1;
        x_1 = one_step_local_search(qubo, &x);
        steps += 1;
    }

    x_1
}

/// Given a QUBO and a vector of initial points, run local searches on each initial point and return all of the solutions.
pub fn multi_simple_local_search(
    qubo: &Qubo,
    xs: &Vec<Array1<usize>>,
    max_steps: usize,
) -> Vec<Array1<usize>> {
    xs.par_iter()
        .map(|x| simple_local_search(qubo, x, max_steps))
        .collect()
}
