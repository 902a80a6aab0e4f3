//! # itinerary-qubo
//!
//! Builds the QUBO of a small city visiting schedule, where every city must be visited exactly
//! once and every day hosts exactly one city, and submits it to an annealing sampler.
//!
//! The run is a straight line: the dense matrix is built, checkpointed to a text file and
//! reloaded, encoded as an upper triangular coefficient mapping, sampled, and the returned
//! records are written to a results file.
//!
//! ``` rust
//! use itinerary_qubo::matrix_builder::build_qubo_matrix;
//! use itinerary_qubo::problem::ScheduleProblem;
//! use itinerary_qubo::sparse_encoder::encode;
//!
//! let problem = ScheduleProblem::example();
//! let q = build_qubo_matrix(&problem);
//! let mapping = encode(&q).unwrap();
//!
//! assert_eq!(mapping.linear().count(), problem.num_x());
//! ```

pub mod checkpoint;
pub mod command_sampler;
pub mod constraint;
pub mod credentials;
pub mod error;
pub mod initial_points;
pub mod local_sampler;
pub mod local_search;
pub mod matrix_builder;
pub mod pipeline;
pub mod problem;
pub mod qubo;
pub mod results;
pub mod run_options;
pub mod sampler;
pub mod schedule;
pub mod sparse_encoder;

pub use error::{ItineraryError, Result};
pub use problem::{DistanceTable, ScheduleProblem};
pub use sampler::{SampleRecord, SampleSet, Sampler, SamplerParams};
pub use sparse_encoder::QuboMapping;
