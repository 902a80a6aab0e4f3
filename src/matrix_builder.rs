//! Builds the dense QUBO matrix of the schedule problem.
//!
//! The matrix is upper triangular: linear terms live on the diagonal and every quadratic term
//! `(i, j)` is stored once with `i < j`.

use crate::problem::ScheduleProblem;
use ndarray::Array2;

/// Builds the cost and penalty matrix for the given problem.
///
/// The objective puts the negated self distance of each city on the diagonal. Two penalty families
/// follow, one over every pair of days for a city and one over every pair of cities for a day,
/// each adding the penalty to both diagonals and subtracting it from the coupling term.
///
/// Missing distances count as zero and no dimension is validated, so empty problems return an
/// empty matrix.
pub fn build_qubo_matrix(problem: &ScheduleProblem) -> Array2<f64> {
    let num_x = problem.num_x();
    let penalty = problem.penalty_weight;
    let mut q = Array2::<f64>::zeros((num_x, num_x));

    for city in 0..problem.n_cities {
        for day in 0..problem.n_days {
            let index = problem.index(city, day);
            // subtracting from zero keeps a missing distance at +0.0
            q[[index, index]] = 0.0 - problem.distances.cost(city, city);
        }
    }

    // each city is visited once
    for city in 0..problem.n_cities {
        for day_1 in 0..problem.n_days {
            for day_2 in (day_1 + 1)..problem.n_days {
                let i = problem.index(city, day_1);
                let j = problem.index(city, day_2);
                add_pair_penalty(&mut q, i, j, penalty);
            }
        }
    }

    // each day hosts one city
    for day in 0..problem.n_days {
        for city_1 in 0..problem.n_cities {
            for city_2 in (city_1 + 1)..problem.n_cities {
                let i = problem.index(city_1, day);
                let j = problem.index(city_2, day);
                add_pair_penalty(&mut q, i, j, penalty);
            }
        }
    }

    q
}

/// Adds the two variable penalty for the pair `(i, j)`, `i < j`
fn add_pair_penalty(q: &mut Array2<f64>, i: usize, j: usize, penalty: f64) {
    q[[i, i]] += penalty;
    q[[j, j]] += penalty;
    q[[i, j]] -= penalty;
}
