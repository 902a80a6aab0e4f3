//! Converts a dense QUBO matrix into the sparse `(row, col) -> coefficient` mapping that samplers
//! consume.
//!
//! The mapping keeps every diagonal entry, zero or not, and only the non-zero couplings of the
//! upper triangle.

use crate::error::{ItineraryError, Result};
use ndarray::Array2;
use std::collections::BTreeMap;

/// Upper triangular coefficient mapping, keys always satisfy `row <= col`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuboMapping {
    coefficients: BTreeMap<(usize, usize), f64>,
    num_x: usize,
}

impl QuboMapping {
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.coefficients.get(&(row, col)).copied()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterates `((row, col), value)` in row major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.coefficients.iter().map(|(k, v)| (*k, *v))
    }

    /// Diagonal entries, the linear terms of the QUBO
    pub fn linear(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.iter()
            .filter(|((i, j), _)| i == j)
            .map(|((i, _), v)| (i, v))
    }

    /// Off diagonal entries, the quadratic couplings of the QUBO
    pub fn quadratic(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.iter().filter(|((i, j), _)| i != j)
    }

    /// Energy of a binary assignment, `sum_{i <= j} q_ij x_i x_j`
    pub fn energy(&self, x: &[usize]) -> f64 {
        self.iter()
            .filter(|((i, j), _)| x[*i] == 1 && x[*j] == 1)
            .map(|(_, v)| v)
            .sum()
    }

    /// Flattens the mapping into `[row, col, value]` triples
    pub fn to_triples(&self) -> Vec<(usize, usize, f64)> {
        self.iter().map(|((i, j), v)| (i, j, v)).collect()
    }
}

/// Encodes a square matrix into a sparse mapping, entries below the diagonal are ignored.
///
/// # Errors
///
/// Returns an error if the matrix is not square.
pub fn encode(q: &Array2<f64>) -> Result<QuboMapping> {
    let (rows, cols) = q.dim();
    if rows != cols {
        return Err(ItineraryError::NonSquareMatrix { rows, cols });
    }

    let mut coefficients = BTreeMap::new();
    for i in 0..rows {
        coefficients.insert((i, i), q[[i, i]]);
        for j in (i + 1)..cols {
            let value = q[[i, j]];
            if value != 0.0 {
                coefficients.insert((i, j), value);
            }
        }
    }

    Ok(QuboMapping {
        coefficients,
        num_x: rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::{format_matrix, parse_matrix};
    use crate::matrix_builder::build_qubo_matrix;
    use crate::problem::{DistanceTable, ScheduleProblem};
    use ndarray::array;

    #[test]
    fn test_keys_are_upper_triangular() {
        let q = build_qubo_matrix(&ScheduleProblem::example());
        let mapping = encode(&q).unwrap();

        assert!(mapping.iter().all(|((i, j), _)| i <= j));
        assert_eq!(mapping.linear().count(), 12);
        assert_eq!(mapping.num_x(), 12);
    }

    #[test]
    fn test_example_coupling_count() {
        // 4 cities with 3 day pairs each, 3 days with 6 city pairs each
        let q = build_qubo_matrix(&ScheduleProblem::example());
        let mapping = encode(&q).unwrap();

        assert_eq!(mapping.quadratic().count(), 4 * 3 + 3 * 6);
        assert!(mapping.quadratic().all(|(_, v)| v == -500.0));
    }

    #[test]
    fn test_zero_diagonal_kept() {
        let q = array![[0.0, 0.0], [0.0, 0.0]];
        let mapping = encode(&q).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(0, 0), Some(0.0));
        assert_eq!(mapping.get(1, 1), Some(0.0));
        assert_eq!(mapping.get(0, 1), None);
    }

    #[test]
    fn test_lower_triangle_ignored() {
        let q = array![[1.0, 0.0], [7.0, 2.0]];
        let mapping = encode(&q).unwrap();

        assert_eq!(mapping.to_triples(), vec![(0, 0, 1.0), (1, 1, 2.0)]);
    }

    #[test]
    fn test_single_variable() {
        let q = build_qubo_matrix(&ScheduleProblem::new(1, 1, 500.0, DistanceTable::example()));
        let mapping = encode(&q).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(0, 0), Some(0.0));
    }

    #[test]
    fn test_non_square_rejected() {
        let q = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            encode(&q),
            Err(ItineraryError::NonSquareMatrix { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_encode_after_checkpoint() {
        let q = array![[1.004, 0.001, -2.5], [0.0, 0.0, 3.333], [0.0, 0.0, -1.0]];
        let direct = encode(&q).unwrap();
        let reloaded = encode(&parse_matrix(&format_matrix(&q)).unwrap()).unwrap();

        // 0.001 rounds to zero and drops out of the mapping
        assert_eq!(direct.get(0, 1), Some(0.001));
        assert_eq!(reloaded.get(0, 1), None);
        for ((i, j), v) in reloaded.iter() {
            let original = direct.get(i, j).unwrap();
            assert!((original - v).abs() <= 0.005 + 1e-12);
        }
    }

    #[test]
    fn test_energy() {
        let q = build_qubo_matrix(&ScheduleProblem::new(2, 2, 500.0, DistanceTable::new()));
        let mapping = encode(&q).unwrap();

        assert_eq!(mapping.energy(&[0, 0, 0, 0]), 0.0);
        assert_eq!(mapping.energy(&[1, 0, 0, 1]), 2000.0);
        assert_eq!(mapping.energy(&[1, 1, 0, 0]), 1500.0);
        assert_eq!(mapping.energy(&[1, 1, 1, 1]), 2000.0);
    }
}
