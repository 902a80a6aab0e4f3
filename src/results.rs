//! Tab separated results file, one line per distinct sample.

use crate::error::Result;
use crate::sampler::{SampleRecord, SampleSet};
use std::fmt::Write as _;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const RESULTS_HEADER: &str = "energy\tnum_occurrences\tsample";

/// Renders an assignment sorted by variable index as `[v0 v1 ...]`
pub fn render_sample(record: &SampleRecord) -> String {
    let values = record
        .values()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ");
    format!("[{values}]")
}

pub fn format_results(samples: &SampleSet) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{RESULTS_HEADER}");
    for record in samples.records() {
        let _ = writeln!(
            out,
            "{:.6}\t{}\t{}",
            record.energy,
            record.num_occurrences,
            render_sample(record)
        );
    }
    out
}

/// Writes the results file to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_results(path: &Path, samples: &SampleSet) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(format_results(samples).as_bytes())?;
    writer.flush()?;
    Ok(())
}
