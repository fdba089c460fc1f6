//! Best-improvement descent.
//!
//! # Algorithm
//!
//! Starting from the seed, enumerate the full neighborhood of the current
//! assignment under one [`Operator`], move to its best neighbor if that
//! neighbor is strictly better, and repeat until no neighbor improves.
//! The first neighbor with the minimum value wins ties.
//!
//! # Complexity
//!
//! O(L²) evaluations per step, L = assignment length.

use crate::evaluation::Evaluator;
use crate::models::Solution;
use crate::neighborhood::Operator;
use crate::search::SearchResult;
use crate::timer::Timer;

/// Runs descent from `initial` until a local optimum or until the time
/// budget is spent.
///
/// Neighbors keep the treatment hubs of `initial`. The trace holds the start
/// value followed by the value of every committed move.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::local_search::local_search;
/// use u_hubloc::neighborhood::Operator;
/// use u_hubloc::timer::Timer;
///
/// let centers = (0..3).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(3, vec![1.0, 9.0, 9.0]).unwrap()).unwrap();
/// let config = HlaConfig::default();
/// let evaluator = Evaluator::new(&data, &config);
///
/// let mut timer = Timer::default();
/// timer.start();
/// let seed = Solution::new(vec![2, 0, 1, -1]);
/// let result = local_search(&evaluator, &mut timer, &seed, Operator::Swap);
/// assert!(result.best_value < evaluator.value(&seed));
/// ```
#[tracing::instrument(level = "debug", name = "Local Search", skip(evaluator, timer, initial))]
pub fn local_search(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    initial: &Solution,
    operator: Operator,
) -> SearchResult {
    let (mut current_value, mut current) = evaluator.evaluate(initial.clone());
    let mut trace = vec![current_value];

    loop {
        if timer.update() {
            return SearchResult {
                best: current,
                best_value: current_value,
                trace,
                aborted: true,
            };
        }

        let Some((value, neighbor)) = best_neighbor(evaluator, &current, operator) else {
            break;
        };

        if value < current_value {
            tracing::debug!(value, previous = current_value, "improving move");
            current_value = value;
            current = neighbor;
            trace.push(value);
        } else {
            break;
        }
    }

    SearchResult {
        best: current,
        best_value: current_value,
        trace,
        aborted: false,
    }
}

/// Best neighbor of `current` under `operator`, first one on ties.
///
/// `None` when the neighborhood is empty.
fn best_neighbor(
    evaluator: &Evaluator<'_>,
    current: &Solution,
    operator: Operator,
) -> Option<(f64, Solution)> {
    let mut best: Option<(f64, Solution)> = None;
    for assignment in operator.neighborhood(current.assignment()) {
        let candidate = current.with_assignment(assignment);
        let value = evaluator.value(&candidate);
        match &best {
            Some((best_value, _)) if value >= *best_value => {}
            _ => best = Some((value, candidate)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::models::{Center, CostConfig, HlaConfig, ProblemData};
    use proptest::prelude::*;
    use std::time::Duration;

    fn unit_costs() -> CostConfig {
        CostConfig {
            unit_transfer_rate: 1.0,
            unit_treatment_rate: 1.0,
            fixed_transfer_cost: 0.0,
            fixed_treatment_cost: 0.0,
        }
    }

    fn instance(wastes: &[f64], distances: Vec<f64>) -> ProblemData {
        let centers = wastes
            .iter()
            .enumerate()
            .map(|(i, &w)| Center::new(i, w, 0.0, 0.0))
            .collect();
        let table = DistanceTable::from_condensed(wastes.len(), distances).expect("valid");
        ProblemData::new(centers, table).expect("valid")
    }

    fn started() -> Timer {
        let mut t = Timer::new(Duration::from_secs(60));
        t.start();
        t
    }

    fn is_local_optimum(eval: &Evaluator<'_>, sol: &Solution, value: f64, op: Operator) -> bool {
        op.neighborhood(sol.assignment())
            .into_iter()
            .all(|a| eval.value(&sol.with_assignment(a)) >= value)
    }

    #[test]
    fn test_four_centers_split_into_two_hubs() {
        let data = instance(&[10.0; 4], vec![1.0; 6]);
        let config = HlaConfig::default()
            .with_costs(unit_costs())
            .with_transfer_capacity(25.0);
        let eval = Evaluator::new(&data, &config);

        // Feasible seed with two hubs
        let seed = Solution::new(vec![0, 1, -1, 2, 3, -1]);
        let result = local_search(&eval, &mut started(), &seed, Operator::Swap);

        assert!(result.best_value.is_finite());
        assert!(result.best.transfer_hubs().len() >= 2);
        assert!(!result.aborted);
    }

    #[test]
    fn test_commits_only_strict_improvements() {
        let data = instance(&[10.0; 3], vec![1.0, 9.0, 9.0]);
        let config = HlaConfig::default().with_costs(unit_costs());
        let eval = Evaluator::new(&data, &config);

        let seed = Solution::new(vec![2, 0, 1, -1]);
        let result = local_search(&eval, &mut started(), &seed, Operator::Insertion);
        for pair in result.trace.windows(2) {
            assert!(pair[1] < pair[0], "trace not strictly decreasing: {:?}", result.trace);
        }
        assert_eq!(result.trace.last().copied(), Some(result.best_value));
    }

    #[test]
    fn test_zero_budget_returns_seed() {
        let data = instance(&[10.0; 3], vec![1.0, 9.0, 9.0]);
        let config = HlaConfig::default();
        let eval = Evaluator::new(&data, &config);

        let mut timer = Timer::new(Duration::ZERO);
        timer.start();
        let seed = Solution::new(vec![2, 0, 1, -1]);
        let result = local_search(&eval, &mut timer, &seed, Operator::Swap);
        assert!(result.aborted);
        assert!(timer.check());
        assert_eq!(result.best, seed);
        assert_eq!(result.trace.len(), 1);
    }

    #[test]
    fn test_keeps_treatment_hub() {
        let data = instance(&[10.0; 3], vec![1.0, 9.0, 9.0]);
        let config = HlaConfig::default();
        let eval = Evaluator::new(&data, &config);
        let seed = Solution::new(vec![2, 0, 1, -1]).with_treatment_hub(1);
        let result = local_search(&eval, &mut started(), &seed, Operator::Swap);
        assert_eq!(result.best.treatment_hub(), Some(1));
    }

    #[test]
    fn test_best_neighbor_first_on_ties() {
        let data = instance(&[1.0; 3], vec![1.0; 3]);
        let config = HlaConfig::default().with_costs(CostConfig {
            fixed_transfer_cost: 10.0,
            ..unit_costs()
        });
        let eval = Evaluator::new(&data, &config);
        let current = Solution::new(vec![0, 1, 2, -1]);
        let (value, neighbor) =
            best_neighbor(&eval, &current, Operator::Swap).expect("non-empty");
        // Every swap that keeps one group costs 12.0; the first enumerated is (0, 1)
        assert_eq!(value, 12.0);
        assert_eq!(neighbor.assignment(), &[1, 0, 2, -1]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_ends_at_local_optimum(
            distances in proptest::collection::vec(1.0f64..50.0, 10),
            wastes in proptest::collection::vec(1.0f64..10.0, 5),
            use_insertion in any::<bool>(),
        ) {
            let data = instance(&wastes, distances);
            let config = HlaConfig::default()
                .with_costs(CostConfig { fixed_transfer_cost: 20.0, ..unit_costs() })
                .with_transfer_capacity(30.0);
            let eval = Evaluator::new(&data, &config);
            let op = if use_insertion { Operator::Insertion } else { Operator::Swap };

            let seed = Solution::new(vec![0, 1, -1, 2, 3, -1, 4, -1]);
            let result = local_search(&eval, &mut started(), &seed, op);

            prop_assert!(!result.aborted);
            prop_assert!(result.best_value <= eval.value(&seed));
            prop_assert!(is_local_optimum(&eval, &result.best, result.best_value, op));
        }
    }
}
