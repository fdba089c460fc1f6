//! Tabu Search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_hubloc::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_tenure(4);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.tenure_for(10), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Capacity of the recency list. `None` uses half the assignment
    /// length.
    pub tenure: Option<usize>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tenure: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets a fixed recency list capacity.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = Some(tenure);
        self
    }

    /// Recency list capacity for an assignment of length `len`.
    pub fn tenure_for(&self, len: usize) -> usize {
        self.tenure.unwrap_or(len / 2)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tenure_for(12), 6);
        assert_eq!(config.tenure_for(5), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_invalid() {
        assert!(TabuConfig::default().with_max_iterations(0).validate().is_err());
    }
}
