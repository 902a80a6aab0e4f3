//! Error types for building, checkpointing and sampling the itinerary QUBO.

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, ItineraryError>;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token in the matrix checkpoint could not be read as a number
    #[error("checkpoint line {line}, column {column}: cannot parse '{token}' as a number")]
    CheckpointParse {
        line: usize,
        column: usize,
        token: String,
    },

    /// A checkpoint row does not have the same width as the first row
    #[error("checkpoint line {line} has {found} values, expected {expected}")]
    RaggedCheckpoint {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("matrix must be square, found {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    #[error("API token not found. Set the {0} environment variable.")]
    TokenNotFound(&'static str),

    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    #[error("sampler command '{command}' failed ({status}): {stderr}")]
    SamplerFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("unknown sampler '{0}', expected local or command")]
    UnknownSampler(String),

    #[error("the command sampler needs a program to run")]
    MissingCommand,

    #[error("invalid sampler response: {0}")]
    InvalidResponse(String),

    #[error("sampler returned no samples")]
    EmptySampleSet,
}
