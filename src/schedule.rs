//! Reads a sampled assignment back as an itinerary.

use crate::constraint::{schedule_constraints, Violation};
use crate::problem::ScheduleProblem;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Cities selected for each day
    pub days: Vec<Vec<usize>>,
    pub violations: Vec<Violation>,
}

impl Schedule {
    /// Decodes a dense binary assignment of length `n_cities * n_days`
    pub fn decode(problem: &ScheduleProblem, x: &[usize]) -> Self {
        let mut days = vec![Vec::new(); problem.n_days];
        for (index, value) in x.iter().enumerate().take(problem.num_x()) {
            if *value == 1 {
                let (city, day) = problem.city_day(index);
                days[day].push(city);
            }
        }

        let violations = schedule_constraints(problem)
            .iter()
            .filter_map(|c| c.violation(x))
            .collect();

        Self { days, violations }
    }

    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// The city visited on each day, if the schedule is feasible
    pub fn itinerary(&self) -> Option<Vec<usize>> {
        match self.is_feasible() {
            true => Some(self.days.iter().map(|cities| cities[0]).collect()),
            false => None,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .days
            .iter()
            .enumerate()
            .map(|(day, cities)| {
                let cities = match cities.is_empty() {
                    true => "-".to_string(),
                    false => cities
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<String>>()
                        .join(","),
                };
                format!("day {day}: {cities}")
            })
            .collect();
        write!(f, "{}", parts.join(" | "))
    }
}
