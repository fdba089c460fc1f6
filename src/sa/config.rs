//! Simulated Annealing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for Simulated Annealing.
///
/// Cooling follows the Lundy-Mees schedule `T ← T / (1 + alpha·T)`, applied
/// once per temperature level.
///
/// # Examples
///
/// ```
/// use u_hubloc::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_alpha(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaConfig {
    /// Starting temperature.
    pub initial_temperature: f64,

    /// The search stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Inner iterations (neighborhood scans) per temperature level.
    pub iterations_per_temperature: usize,

    /// Lundy-Mees cooling parameter.
    pub alpha: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1.0,
            iterations_per_temperature: 10,
            alpha: 0.0001,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(format!("alpha must be positive, got {}", self.alpha));
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        Ok(())
    }

    /// Number of temperature levels the schedule visits.
    pub fn levels(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut levels = 0;
        while t > self.min_temperature {
            t = cool(t, self.alpha);
            levels += 1;
        }
        levels
    }
}

/// One Lundy-Mees cooling step.
#[inline]
pub(crate) fn cool(temperature: f64, alpha: f64) -> f64 {
    temperature / (1.0 + alpha * temperature)
}
