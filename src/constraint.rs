use crate::problem::ScheduleProblem;

/// Which assignment rule a constraint group encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// The city is visited on exactly one day
    CityVisitedOnce(usize),
    /// The day hosts exactly one city
    DayHasOneCity(usize),
}

/// An exactly one constraint over a group of variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub(crate) indices: Vec<usize>,
    pub(crate) constr_type: ConstraintType,
}

/// A constraint that the assignment breaks, with the number of variables it set in the group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub constr_type: ConstraintType,
    pub num_set: usize,
}

impl Constraint {
    pub const fn new(indices: Vec<usize>, constraint_type: ConstraintType) -> Self {
        Self {
            indices,
            constr_type: constraint_type,
        }
    }

    pub const fn constraint_type(&self) -> ConstraintType {
        self.constr_type
    }

    /// Number of variables of the group that are set in `x`
    pub fn num_set(&self, x: &[usize]) -> usize {
        self.indices.iter().filter(|i| x[**i] == 1).count()
    }

    pub fn check(&self, x: &[usize]) -> bool {
        Self::exactly_one(self.num_set(x))
    }

    pub const fn exactly_one(num_set: usize) -> bool {
        num_set == 1
    }

    pub fn violation(&self, x: &[usize]) -> Option<Violation> {
        let num_set = self.num_set(x);
        match Self::exactly_one(num_set) {
            true => None,
            false => Some(Violation {
                constr_type: self.constr_type,
                num_set,
            }),
        }
    }
}

/// Generates every constraint of the schedule problem, cities first and then days
pub fn schedule_constraints(problem: &ScheduleProblem) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(problem.n_cities + problem.n_days);

    for city in 0..problem.n_cities {
        let indices = (0..problem.n_days)
            .map(|day| problem.index(city, day))
            .collect();
        constraints.push(Constraint::new(
            indices,
            ConstraintType::CityVisitedOnce(city),
        ));
    }

    for day in 0..problem.n_days {
        let indices = (0..problem.n_cities)
            .map(|city| problem.index(city, day))
            .collect();
        constraints.push(Constraint::new(indices, ConstraintType::DayHasOneCity(day)));
    }

    constraints
}
