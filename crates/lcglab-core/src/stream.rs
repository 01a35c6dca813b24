//! Line-oriented persistence for generated value streams.
//!
//! # Storage format
//!
//! One decimal value per line, newline-terminated, in generation order.
//! No header, no delimiter other than the newline. One file per
//! parameterization.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::EvalError;

/// Write a value stream to `path`, one value per line.
pub fn write_values(path: &Path, values: &[f64]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;
    debug!("wrote {} values to {}", values.len(), path.display());
    Ok(())
}

/// Read a value stream back in file order.
///
/// A line that does not parse as a real number is an error, not a skip:
/// the statistics downstream depend on n matching the true value count.
pub fn read_values(path: &Path) -> Result<Vec<f64>, EvalError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let value: f64 = line
            .trim()
            .parse()
            .map_err(|_| EvalError::MalformedInput {
                line: idx + 1,
                content: line.clone(),
            })?;
        values.push(value);
    }
    debug!("read {} values from {}", values.len(), path.display());
    Ok(values)
}
