//! Reads and writes the dense QUBO matrix as whitespace delimited text.
//!
//! Each row of the matrix is one line and every value is written with two decimals, so a reload
//! reproduces the matrix only up to that precision.

use crate::error::{ItineraryError, Result};
use log::debug;
use ndarray::Array2;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the matrix in the checkpoint text format.
pub fn format_matrix(q: &Array2<f64>) -> String {
    let mut out = String::new();
    for row in q.rows() {
        let line = row
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<String>>()
            .join(" ");
        // writing into a String cannot fail
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Parses checkpoint text back into a square matrix, blank lines are skipped.
///
/// # Errors
///
/// Returns an error on a token that is not a number, on rows of different widths, or when the
/// number of rows does not match the row width.
pub fn parse_matrix(text: &str) -> Result<Array2<f64>> {
    let mut data = Vec::<f64>::new();
    let mut rows = 0;
    let mut cols = 0;

    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut width = 0;
        for (column, token) in line.split_whitespace().enumerate() {
            let value = token
                .parse::<f64>()
                .map_err(|_| ItineraryError::CheckpointParse {
                    line: line_number + 1,
                    column: column + 1,
                    token: token.to_string(),
                })?;
            data.push(value);
            width += 1;
        }

        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(ItineraryError::RaggedCheckpoint {
                line: line_number + 1,
                found: width,
                expected: cols,
            });
        }
        rows += 1;
    }

    if rows != cols {
        return Err(ItineraryError::NonSquareMatrix { rows, cols });
    }

    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

/// Writes the matrix checkpoint to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_matrix(path: &Path, q: &Array2<f64>) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(format_matrix(q).as_bytes())?;
    writer.flush()?;
    debug!("wrote {}x{} matrix to {}", q.nrows(), q.ncols(), path.display());
    Ok(())
}

/// Reads a matrix checkpoint from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a square matrix.
pub fn read_matrix(path: &Path) -> Result<Array2<f64>> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}
