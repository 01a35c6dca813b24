//! Runs test for independence of successive values.
//!
//! A run is a maximal stretch of strictly increasing or strictly decreasing
//! consecutive values. Equal neighbors are inert: they neither start,
//! extend, nor end a run.

use serde::Serialize;

use crate::error::EvalError;

/// Direction of a monotonic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// One run: its direction and how many direction-preserving steps it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub direction: Direction,
    pub length: usize,
}

/// Runs discovered in a single pass, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct RunsSummary {
    pub run_count: usize,
    pub runs: Vec<Run>,
}

impl RunsSummary {
    /// Run lengths in discovery order.
    pub fn run_lengths(&self) -> Vec<usize> {
        self.runs.iter().map(|r| r.length).collect()
    }
}

/// Scan consecutive pairs and count direction runs.
///
/// An increase while not already going up opens a new Up run of length 1;
/// an increase while going up extends the current run. Decreases mirror
/// this. Equal pairs leave both the count and the tracked direction alone.
pub fn count_runs(values: &[f64]) -> RunsSummary {
    let mut runs: Vec<Run> = Vec::new();
    let mut direction: Option<Direction> = None;

    for pair in values.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if current == next {
            continue;
        }
        let observed = if current < next {
            Direction::Up
        } else {
            Direction::Down
        };
        if direction == Some(observed) {
            if let Some(run) = runs.last_mut() {
                run.length += 1;
            }
        } else {
            runs.push(Run {
                direction: observed,
                length: 1,
            });
            direction = Some(observed);
        }
    }

    RunsSummary {
        run_count: runs.len(),
        runs,
    }
}

/// z statistic for an observed run count over `n` total observations.
///
/// Under independence the run count has mean (2n−1)/3 and variance
/// (16n−29)/90.
pub fn z_statistic(run_count: usize, n: usize) -> Result<f64, EvalError> {
    let nf = n as f64;
    let variance = (16.0 * nf - 29.0) / 90.0;
    if variance <= 0.0 {
        return Err(EvalError::Domain(format!(
            "non-positive run-count variance for n={n}"
        )));
    }
    let mean = (2.0 * nf - 1.0) / 3.0;
    Ok((run_count as f64 - mean) / variance.sqrt())
}

/// Count runs over `values` and derive the z statistic with `n` observations.
///
/// `n` is the total observation count the mean and variance are built from,
/// normally `values.len()`.
pub fn compute_z(values: &[f64], n: usize) -> Result<f64, EvalError> {
    if values.len() < 2 {
        return Err(EvalError::Domain(format!(
            "runs test needs at least 2 values, got {}",
            values.len()
        )));
    }
    let summary = count_runs(values);
    z_statistic(summary.run_count, n)
}
