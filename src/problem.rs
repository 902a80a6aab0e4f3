//! The city visiting schedule problem: problem dimensions, the penalty weight and the table of
//! travel costs between cities.
//!
//! Every (city, day) pair is a binary variable, laid out row-major over the city and then the day,
//! so the variable for `city` on `day` sits at `city * n_days + day`.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Partial mapping from unordered city pairs to travel costs, absent pairs cost nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    costs: HashMap<(usize, usize), f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// The four city example table, cities A=0, B=1, C=2, D=3
    pub fn example() -> Self {
        Self::from_triples(&[
            (0, 1, 100.0),
            (0, 2, 200.0),
            (0, 3, 300.0),
            (1, 2, 150.0),
            (1, 3, 250.0),
            (2, 3, 100.0),
        ])
    }

    pub fn from_triples(triples: &[(usize, usize, f64)]) -> Self {
        let mut table = Self::new();
        for &(a, b, cost) in triples {
            table.insert(a, b, cost);
        }
        table
    }

    /// Reads a JSON array of `[city_a, city_b, cost]` triples.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not an array of triples.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let triples: Vec<(usize, usize, f64)> = serde_json::from_str(&content)?;
        Ok(Self::from_triples(&triples))
    }

    pub fn insert(&mut self, a: usize, b: usize, cost: f64) {
        self.costs.insert(Self::key(a, b), cost);
    }

    pub fn get(&self, a: usize, b: usize) -> Option<f64> {
        self.costs.get(&Self::key(a, b)).copied()
    }

    /// Looks up a pair, falling back to zero cost if the pair is not in the table
    pub fn cost(&self, a: usize, b: usize) -> f64 {
        self.get(a, b).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    const fn key(a: usize, b: usize) -> (usize, usize) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Dimensions, penalty and costs of one schedule instance
#[derive(Debug, Clone)]
pub struct ScheduleProblem {
    pub n_cities: usize,
    pub n_days: usize,
    pub penalty_weight: f64,
    pub distances: DistanceTable,
}

impl ScheduleProblem {
    pub const fn new(
        n_cities: usize,
        n_days: usize,
        penalty_weight: f64,
        distances: DistanceTable,
    ) -> Self {
        Self {
            n_cities,
            n_days,
            penalty_weight,
            distances,
        }
    }

    /// Four cities over three days with a penalty of 500
    pub fn example() -> Self {
        Self::new(4, 3, 500.0, DistanceTable::example())
    }

    pub const fn num_x(&self) -> usize {
        self.n_cities * self.n_days
    }

    pub const fn index(&self, city: usize, day: usize) -> usize {
        city * self.n_days + day
    }

    /// Inverse of `index`, returns `(city, day)`
    pub const fn city_day(&self, index: usize) -> (usize, usize) {
        (index / self.n_days, index % self.n_days)
    }
}
