//! Error types for the generation and evaluation pipeline.

use thiserror::Error;

/// Errors surfaced by stream persistence and the statistical tests.
///
/// Every error propagates to the immediate caller; nothing here is retried
/// (the computations are deterministic) and none of these abort the process.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Significance level with no entry in the requested critical-value table.
    #[error("unsupported significance level {level} for the {table} table")]
    InvalidParameter {
        /// Which table was consulted (`"ks"`, `"z two-sided"`, `"z one-sided"`).
        table: &'static str,
        /// The level the caller asked for.
        level: f64,
    },

    /// Input that cannot support the requested statistic.
    #[error("degenerate sample: {0}")]
    Domain(String),

    /// A persisted value line that does not parse as a real number.
    ///
    /// Malformed lines are never skipped: dropping values would silently
    /// shift the sample size every downstream statistic depends on.
    #[error("line {line}: malformed value {content:?}")]
    MalformedInput { line: usize, content: String },

    /// I/O failure while reading or writing a value stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = EvalError::InvalidParameter {
            table: "ks",
            level: 0.2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported significance level 0.2 for the ks table"
        );

        let err = EvalError::MalformedInput {
            line: 7,
            content: "0.5x".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("0.5x"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EvalError = io.into();
        assert!(matches!(err, EvalError::Io(_)));
    }
}
