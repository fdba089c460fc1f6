//! Error type for malformed input.
//!
//! Infeasible solutions and exhausted time budgets are not errors: the former
//! evaluate to `f64::INFINITY`, the latter end a search early with the best
//! solution found so far.

use std::fmt;

/// Fatal input errors raised at construction or dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub enum HlaError {
    /// Condensed distance sequence has the wrong length for the center count.
    DistanceLength {
        /// Number of centers.
        size: usize,
        /// Required sequence length.
        expected: usize,
        /// Supplied sequence length.
        actual: usize,
    },
    /// Distance table and center list disagree on the number of centers.
    SizeMismatch {
        /// Number of centers supplied.
        centers: usize,
        /// Size of the distance table.
        distances: usize,
    },
    /// Solution violates the partition invariant.
    MalformedSolution(String),
    /// Algorithm name not recognized.
    UnknownAlgorithm(String),
    /// Configuration rejected by `validate()`.
    InvalidConfig(String),
    /// Instance data could not be parsed.
    Parse(String),
}

/// Result alias used throughout the crate.
pub type HlaResult<T> = Result<T, HlaError>;

impl fmt::Display for HlaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HlaError::DistanceLength {
                size,
                expected,
                actual,
            } => write!(
                f,
                "distance table for {size} centers needs {expected} entries, got {actual}"
            ),
            HlaError::SizeMismatch { centers, distances } => write!(
                f,
                "{centers} centers supplied but distance table covers {distances}"
            ),
            HlaError::MalformedSolution(msg) => write!(f, "malformed solution: {msg}"),
            HlaError::UnknownAlgorithm(name) => write!(f, "unknown algorithm '{name}'"),
            HlaError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            HlaError::Parse(msg) => write!(f, "cannot parse instance: {msg}"),
        }
    }
}

impl std::error::Error for HlaError {}

impl From<serde_json::Error> for HlaError {
    fn from(value: serde_json::Error) -> Self {
        HlaError::Parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_distance_length() {
        let err = HlaError::DistanceLength {
            size: 4,
            expected: 6,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "distance table for 4 centers needs 6 entries, got 5"
        );
    }

    #[test]
    fn test_display_unknown_algorithm() {
        let err = HlaError::UnknownAlgorithm("Genetic".into());
        assert_eq!(err.to_string(), "unknown algorithm 'Genetic'");
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<Vec<f64>>("[1.0,").expect_err("truncated input");
        assert!(matches!(HlaError::from(err), HlaError::Parse(_)));
    }
}
