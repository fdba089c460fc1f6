//! Solution evaluator that computes hub loads, leg costs, and feasibility.

use crate::models::{decode_groups, HlaConfig, ProblemData, Solution};

/// Detailed evaluation of a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// Total waste handled by each transfer hub (own waste included), in
    /// group order.
    pub hub_loads: Vec<(usize, f64)>,
    /// Σ distance(center, hub) × waste(center) over non-hub members.
    pub transfer_load: f64,
    /// Σ distance(hub, treatment) × hub load over all transfer hubs.
    pub treatment_load: f64,
    /// Number of treatment hubs designated.
    pub num_treatment_hubs: usize,
    /// Whether some transfer hub exceeds its capacity.
    pub transfer_overload: bool,
    /// Cost as if the solution were feasible.
    pub cost: f64,
}

impl CostBreakdown {
    /// Number of transfer hubs (groups).
    pub fn num_transfer_hubs(&self) -> usize {
        self.hub_loads.len()
    }

    /// Total waste routed to the treatment echelon.
    pub fn total_waste(&self) -> f64 {
        self.hub_loads.iter().map(|&(_, w)| w).sum()
    }
}

/// Evaluates solutions against an instance and its configuration.
///
/// The evaluator only reads shared data, so one instance may be used by any
/// number of searches, including concurrently from several threads.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
///
/// let centers = vec![
///     Center::new(0, 10.0, 0.0, 0.0),
///     Center::new(1, 20.0, 0.0, 0.0),
/// ];
/// let data = ProblemData::new(
///     centers,
///     DistanceTable::from_condensed(2, vec![2.0]).unwrap(),
/// ).unwrap();
/// let config = HlaConfig::default();
/// let evaluator = Evaluator::new(&data, &config);
///
/// // Hub 0 serves center 1: one fixed cost plus 2.0 × 20.0 × 1.2
/// let (value, _) = evaluator.evaluate(Solution::new(vec![0, 1, -1]));
/// assert!((value - (197_072.0 + 48.0)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    data: &'a ProblemData,
    config: &'a HlaConfig,
}

impl<'a> Evaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(data: &'a ProblemData, config: &'a HlaConfig) -> Self {
        Self { data, config }
    }

    /// Instance data.
    pub fn data(&self) -> &'a ProblemData {
        self.data
    }

    /// Cost and capacity configuration.
    pub fn config(&self) -> &'a HlaConfig {
        self.config
    }

    /// Evaluates a solution and hands it back alongside its value.
    ///
    /// The value is `f64::INFINITY` for infeasible solutions.
    pub fn evaluate(&self, solution: Solution) -> (f64, Solution) {
        (self.value(&solution), solution)
    }

    /// Value of a solution: its cost, or `f64::INFINITY` if infeasible.
    pub fn value(&self, solution: &Solution) -> f64 {
        let breakdown = self.breakdown(solution);
        let value = if self.is_feasible(&breakdown) {
            breakdown.cost
        } else {
            f64::INFINITY
        };
        tracing::trace!(value, hubs = breakdown.num_transfer_hubs(), "evaluated solution");
        value
    }

    /// Feasibility verdict for a computed breakdown.
    ///
    /// Requires at least one transfer hub, no transfer overload, and the
    /// summed hub loads within the treatment capacity.
    pub fn is_feasible(&self, breakdown: &CostBreakdown) -> bool {
        breakdown.num_transfer_hubs() > 0
            && !breakdown.transfer_overload
            && breakdown.total_waste() <= self.config.capacities.treatment
    }

    /// Computes hub loads, both transport legs, and the cost of a solution.
    pub fn breakdown(&self, solution: &Solution) -> CostBreakdown {
        let qt = self.config.capacities.transfer;
        let costs = &self.config.costs;

        let mut hub_loads = Vec::new();
        let mut transfer_load = 0.0;
        let mut transfer_overload = false;

        for group in decode_groups(solution.assignment()) {
            let mut waste_at_hub = self.data.waste(group.hub);
            for &center in &group.members {
                let waste = self.data.waste(center);
                waste_at_hub += waste;
                transfer_load += self.data.distance(center, group.hub) * waste;
            }
            if waste_at_hub > qt {
                transfer_overload = true;
            }
            hub_loads.push((group.hub, waste_at_hub));
        }

        let mut treatment_load = 0.0;
        if let Some(treatment) = solution.treatment_hub() {
            for &(hub, waste) in &hub_loads {
                treatment_load += self.data.distance(hub, treatment) * waste;
            }
        }

        let num_treatment_hubs = solution.treatment_hubs().len();
        let cost = hub_loads.len() as f64 * costs.fixed_transfer_cost
            + transfer_load * costs.unit_transfer_rate
            + num_treatment_hubs as f64 * costs.fixed_treatment_cost
            + treatment_load * costs.unit_treatment_rate;

        CostBreakdown {
            hub_loads,
            transfer_load,
            treatment_load,
            num_treatment_hubs,
            transfer_overload,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::models::{Center, CostConfig};
    use proptest::prelude::*;

    fn unit_costs() -> CostConfig {
        CostConfig {
            unit_transfer_rate: 1.0,
            unit_treatment_rate: 1.0,
            fixed_transfer_cost: 0.0,
            fixed_treatment_cost: 0.0,
        }
    }

    fn setup(wastes: &[f64]) -> ProblemData {
        let n = wastes.len();
        let centers = wastes
            .iter()
            .enumerate()
            .map(|(i, &w)| Center::new(i, w, 0.0, 0.0))
            .collect();
        let distances = DistanceTable::from_condensed(n, vec![1.0; n * (n - 1) / 2]).expect("valid");
        ProblemData::new(centers, distances).expect("valid")
    }

    #[test]
    fn test_single_hub_cost() {
        let data = setup(&[10.0, 10.0, 10.0]);
        let config = HlaConfig::default().with_costs(CostConfig {
            fixed_transfer_cost: 100.0,
            ..unit_costs()
        });
        let eval = Evaluator::new(&data, &config);
        // 1 hub (100) + 2 members × distance 1 × waste 10
        assert!((eval.value(&Solution::new(vec![0, 1, 2, -1])) - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_treatment_leg() {
        let data = setup(&[10.0, 10.0, 10.0, 10.0]);
        let config = HlaConfig::default().with_costs(CostConfig {
            fixed_treatment_cost: 7.0,
            ..unit_costs()
        });
        let eval = Evaluator::new(&data, &config);
        let sol = Solution::new(vec![0, 1, -1, 2, 3, -1]).with_treatment_hub(0);
        let b = eval.breakdown(&sol);
        assert_eq!(b.hub_loads, vec![(0, 20.0), (2, 20.0)]);
        assert!((b.transfer_load - 20.0).abs() < 1e-10);
        // hub 0 is the treatment hub (distance 0); hub 2 ships 20 over distance 1
        assert!((b.treatment_load - 20.0).abs() < 1e-10);
        assert!((eval.value(&sol) - 47.0).abs() < 1e-10);
    }

    #[test]
    fn test_transfer_overload_infeasible() {
        let data = setup(&[10.0, 10.0, 10.0, 10.0]);
        let config = HlaConfig::default()
            .with_costs(unit_costs())
            .with_transfer_capacity(25.0);
        let eval = Evaluator::new(&data, &config);
        assert_eq!(
            eval.value(&Solution::new(vec![0, 1, 2, -1, 3, -1])),
            f64::INFINITY
        );
        assert!(eval.value(&Solution::new(vec![0, 1, -1, 2, 3, -1])).is_finite());
    }

    #[test]
    fn test_hub_alone_over_capacity() {
        let data = setup(&[30.0, 1.0]);
        let config = HlaConfig::default().with_transfer_capacity(25.0);
        let eval = Evaluator::new(&data, &config);
        assert_eq!(eval.value(&Solution::new(vec![0, -1, 1, -1])), f64::INFINITY);
    }

    #[test]
    fn test_treatment_capacity_uses_waste_totals() {
        // Two hubs, 40 units total: infeasible under QP = 35 even though
        // there are only two hubs.
        let data = setup(&[10.0, 10.0, 10.0, 10.0]);
        let config = HlaConfig::default().with_treatment_capacity(35.0);
        let eval = Evaluator::new(&data, &config);
        let sol = Solution::new(vec![0, 1, -1, 2, 3, -1]);
        assert_eq!(eval.breakdown(&sol).total_waste(), 40.0);
        assert_eq!(eval.value(&sol), f64::INFINITY);

        let roomy = HlaConfig::default().with_treatment_capacity(40.0);
        assert!(Evaluator::new(&data, &roomy).value(&sol).is_finite());
    }

    #[test]
    fn test_no_hubs_infeasible() {
        let data = setup(&[1.0, 1.0]);
        let config = HlaConfig::default();
        let eval = Evaluator::new(&data, &config);
        assert_eq!(eval.value(&Solution::new(vec![-1, -1])), f64::INFINITY);
    }

    #[test]
    fn test_evaluate_returns_solution_unchanged() {
        let data = setup(&[10.0, 10.0]);
        let config = HlaConfig::default().with_transfer_capacity(5.0);
        let eval = Evaluator::new(&data, &config);
        let sol = Solution::new(vec![1, 0, -1]).with_treatment_hub(1);
        let (value, back) = eval.evaluate(sol.clone());
        assert_eq!(value, f64::INFINITY);
        assert_eq!(back, sol);
    }

    #[test]
    fn test_concurrent_use() {
        let data = setup(&[10.0, 10.0, 10.0]);
        let config = HlaConfig::default();
        let eval = Evaluator::new(&data, &config);
        let sol = Solution::new(vec![0, 1, 2, -1]);
        let expected = eval.value(&sol);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| eval.value(&sol))).collect();
            for h in handles {
                assert_eq!(h.join().expect("thread finished"), expected);
            }
        });
    }

    proptest! {
        #[test]
        fn prop_more_waste_never_restores_feasibility(
            wastes in proptest::collection::vec(1.0f64..20.0, 4),
            bump_center in 0usize..4,
            bump in 0.0f64..30.0,
        ) {
            let config = HlaConfig::default().with_transfer_capacity(30.0);
            let sol = Solution::new(vec![0, 1, -1, 2, 3, -1]);

            let base = setup(&wastes);
            let mut heavier = wastes.clone();
            heavier[bump_center] += bump;
            let bumped = setup(&heavier);

            let before = Evaluator::new(&base, &config).value(&sol);
            let after = Evaluator::new(&bumped, &config).value(&sol);
            prop_assert!(before.is_finite() || after.is_infinite());
        }
    }
}
