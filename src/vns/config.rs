//! Variable Neighborhood Search configuration.

use serde::{Deserialize, Serialize};

use crate::neighborhood::DEFAULT_SHAKE_FRACTION;

/// Configuration parameters for VNS shaking.
///
/// # Examples
///
/// ```
/// use u_hubloc::vns::VnsConfig;
///
/// let config = VnsConfig::default().with_shake_fraction(0.3).with_seed(7);
/// assert_eq!(config.shake_fraction, 0.3);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VnsConfig {
    /// Fraction of the assignment exchanged by one shaking move.
    pub shake_fraction: f64,
    /// Random seed (None for an entropy seed).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            shake_fraction: DEFAULT_SHAKE_FRACTION,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the shaking fraction.
    pub fn with_shake_fraction(mut self, fraction: f64) -> Self {
        self.shake_fraction = fraction;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.shake_fraction) {
            return Err(format!(
                "shake_fraction must be in [0, 1), got {}",
                self.shake_fraction
            ));
        }
        Ok(())
    }
}
