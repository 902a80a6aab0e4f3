use ndarray::Array1;
use smolprng::{Algorithm, PRNG};

/// Generates a random binary point where each bit is set with probability `sparsity`
pub fn generate_random_binary_point<T: Algorithm>(
    num_x: usize,
    prng: &mut PRNG<T>,
    sparsity: f64,
) -> Array1<usize> {
    let mut x = Array1::<usize>::zeros(num_x);
    for i in 0..x.len() {
        if prng.gen_f64() < sparsity {
            x[i] = 1;
        }
    }
    x
}

/// Generates `num_points` random binary points from consecutive seeds starting at `seed`
pub fn generate_random_binary_points(
    num_x: usize,
    num_points: usize,
    seed: u64,
) -> Vec<Array1<usize>> {
    (0..num_points as u64)
        .map(|k| {
            let mut prng = PRNG {
                generator: smolprng::JsfLarge::from(seed.wrapping_add(k)),
            };
            generate_random_binary_point(num_x, &mut prng, 0.5)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smolprng::JsfLarge;

    #[test]
    fn test_binary_point_is_binary() {
        let mut prng = PRNG {
            generator: JsfLarge::default(),
        };
        let x = generate_random_binary_point(50, &mut prng, 0.5);

        assert_eq!(x.len(), 50);
        assert!(x.iter().all(|v| *v <= 1));
    }

    #[test]
    fn test_sparsity_extremes() {
        let mut prng = PRNG {
            generator: JsfLarge::default(),
        };
        assert_eq!(generate_random_binary_point(10, &mut prng, 0.0).sum(), 0);
        assert_eq!(generate_random_binary_point(10, &mut prng, 1.1).sum(), 10);
    }

    #[test]
    fn test_points_are_reproducible() {
        let a = generate_random_binary_points(12, 8, 42);
        let b = generate_random_binary_points(12, 8, 42);

        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
    }
}
