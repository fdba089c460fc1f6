//! Cost and capacity parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unit and fixed costs of the two echelons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostConfig {
    /// Cost per distance·waste unit from a center to its transfer hub.
    pub unit_transfer_rate: f64,
    /// Cost per distance·waste unit from a transfer hub to the treatment hub.
    pub unit_treatment_rate: f64,
    /// Fixed cost of opening one transfer hub.
    pub fixed_transfer_cost: f64,
    /// Fixed cost of opening one treatment hub.
    pub fixed_treatment_cost: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            unit_transfer_rate: 1.2,
            unit_treatment_rate: 0.00006,
            fixed_transfer_cost: 197_072.0,
            fixed_treatment_cost: 215_138.0,
        }
    }
}

/// Hub capacities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Maximum waste a transfer hub may handle (`QT`), its own included.
    pub transfer: f64,
    /// Maximum waste the treatment hub may receive (`QP`).
    pub treatment: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            transfer: 50_000.0,
            treatment: 500_000.0,
        }
    }
}

/// Problem-level configuration supplied once at solver construction.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_hubloc::models::HlaConfig;
///
/// let config = HlaConfig::default()
///     .with_transfer_capacity(25.0)
///     .with_hub_slack(0)
///     .with_max_time(Duration::from_millis(500));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.hub_bounds(&[10.0, 10.0, 10.0, 10.0]), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HlaConfig {
    /// Unit and fixed costs.
    pub costs: CostConfig,
    /// Hub capacities.
    pub capacities: CapacityConfig,
    /// Extra transfer hubs allowed on top of the capacity lower bound.
    pub hub_slack: usize,
    /// Wall-clock budget for one solve.
    pub max_time: Duration,
}

impl Default for HlaConfig {
    fn default() -> Self {
        Self {
            costs: CostConfig::default(),
            capacities: CapacityConfig::default(),
            hub_slack: 5,
            max_time: Duration::from_secs(5),
        }
    }
}

impl HlaConfig {
    pub fn with_costs(mut self, costs: CostConfig) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_transfer_capacity(mut self, qt: f64) -> Self {
        self.capacities.transfer = qt;
        self
    }

    pub fn with_treatment_capacity(mut self, qp: f64) -> Self {
        self.capacities.treatment = qp;
        self
    }

    pub fn with_hub_slack(mut self, slack: usize) -> Self {
        self.hub_slack = slack;
        self
    }

    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    /// Lower and upper bound on the number of transfer hubs for the given
    /// per-center waste.
    ///
    /// The lower bound is `ceil(total / QT)`; the upper bound adds
    /// `hub_slack` and never exceeds the number of centers.
    pub fn hub_bounds(&self, wastes: &[f64]) -> (usize, usize) {
        let total: f64 = wastes.iter().sum();
        let min_hubs = ((total / self.capacities.transfer).ceil().max(1.0)) as usize;
        let max_hubs = (min_hubs + self.hub_slack).min(wastes.len());
        (min_hubs, max_hubs)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let c = &self.costs;
        for (name, value) in [
            ("unit_transfer_rate", c.unit_transfer_rate),
            ("unit_treatment_rate", c.unit_treatment_rate),
            ("fixed_transfer_cost", c.fixed_transfer_cost),
            ("fixed_treatment_cost", c.fixed_treatment_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }
        if self.capacities.transfer.is_nan() || self.capacities.transfer <= 0.0 {
            return Err("transfer capacity must be positive".into());
        }
        if self.capacities.treatment.is_nan() || self.capacities.treatment <= 0.0 {
            return Err("treatment capacity must be positive".into());
        }
        Ok(())
    }
}
