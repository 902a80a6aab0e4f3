use crate::sparse_encoder::QuboMapping;
use ndarray::Array1;
use sprs::{CsMat, TriMat};

/// QUBO in the form `0.5 x'Qx + c'x`, with `Q` symmetric and holding only the couplings
pub struct Qubo {
    pub q: CsMat<f64>,
    pub c: Array1<f64>,
}

impl Qubo {
    pub fn new_with_c(q: CsMat<f64>, c: Array1<f64>) -> Self {
        Self { q, c }
    }

    /// Builds the QUBO from an upper triangular mapping.
    ///
    /// Diagonal coefficients become the linear term, and each coupling `(i, j)` is mirrored to
    /// `(j, i)` so that `0.5 x'Qx` counts it exactly once.
    pub fn from_mapping(mapping: &QuboMapping) -> Self {
        let num_x = mapping.num_x();
        let mut q = TriMat::<f64>::new((num_x, num_x));
        let mut c = Array1::<f64>::zeros(num_x);

        for (i, value) in mapping.linear() {
            c[i] += value;
        }

        for ((i, j), value) in mapping.quadratic() {
            q.add_triplet(i, j, value);
            q.add_triplet(j, i, value);
        }

        Self::new_with_c(q.to_csr(), c)
    }

    pub fn num_x(&self) -> usize {
        self.q.cols()
    }

    /// Objective value of a binary point
    pub fn eval_usize(&self, x: &Array1<usize>) -> f64 {
        let mut quad = 0.0;
        for (value, (i, j)) in self.q.iter() {
            if x[i] == 1 && x[j] == 1 {
                quad += *value;
            }
        }

        let lin: f64 = self
            .c
            .iter()
            .zip(x.iter())
            .filter(|(_, x_i)| **x_i == 1)
            .map(|(c_i, _)| *c_i)
            .sum();

        0.5 * quad + lin
    }

    /// Change in objective from flipping each bit of `x` on its own.
    ///
    /// Runs in O(|Q|) + O(n) by reading the row of each variable once.
    pub fn one_flip_deltas(&self, x: &Array1<usize>) -> Array1<f64> {
        let mut deltas = Array1::<f64>::zeros(self.num_x());

        for (i, row) in self.q.outer_iterator().enumerate() {
            let mut field = self.c[i];
            for (j, value) in row.iter() {
                if x[j] == 1 {
                    field += *value;
                }
            }

            // flipping 0 -> 1 adds the local field, 1 -> 0 removes it
            deltas[i] = match x[i] {
                0 => field,
                _ => -field,
            };
        }

        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_builder::build_qubo_matrix;
    use crate::problem::{DistanceTable, ScheduleProblem};
    use crate::sparse_encoder::encode;

    fn two_by_two() -> (QuboMapping, Qubo) {
        let q = build_qubo_matrix(&ScheduleProblem::new(2, 2, 500.0, DistanceTable::new()));
        let mapping = encode(&q).unwrap();
        let qubo = Qubo::from_mapping(&mapping);
        (mapping, qubo)
    }

    #[test]
    fn test_eval_matches_mapping_energy() {
        let (mapping, qubo) = two_by_two();

        for bits in 0..16usize {
            let x: Vec<usize> = (0..4).map(|k| (bits >> k) & 1).collect();
            let x_arr = Array1::from_vec(x.clone());
            assert_eq!(qubo.eval_usize(&x_arr), mapping.energy(&x));
        }
    }

    #[test]
    fn test_one_flip_deltas() {
        let (_, qubo) = two_by_two();
        let x = Array1::from_vec(vec![1, 0, 0, 1]);
        let base = qubo.eval_usize(&x);
        let deltas = qubo.one_flip_deltas(&x);

        for i in 0..4 {
            let mut x_1 = x.clone();
            x_1[i] = 1 - x_1[i];
            assert_eq!(qubo.eval_usize(&x_1) - base, deltas[i]);
        }
    }

    #[test]
    fn test_empty() {
        let qubo = Qubo::from_mapping(&QuboMapping::default());
        assert_eq!(qubo.num_x(), 0);
        assert_eq!(qubo.eval_usize(&Array1::zeros(0)), 0.0);
    }
}
