//! Cost-saving construction.
//!
//! # Algorithm
//!
//! 1. For every center `i`, compute its weighted reach
//!    `Σ_j d(i, j) × waste(j)`.
//! 2. Open the `max_hubs` centers with the smallest reach as transfer hubs
//!    (ties go to the lower index).
//! 3. Assign every other center, in index order, to the hub with the lowest
//!    shipping cost `d(center, hub) × waste(center)` that still has room for
//!    it under `QT`, falling back to the next-cheapest hub when full.
//!
//! A hub has room when its load after the assignment stays within `QT`;
//! filling it exactly to `QT` is allowed, the same boundary the evaluator
//! uses for feasibility.
//!
//! If no hub has room the center joins its cheapest hub anyway; the result
//! then evaluates as infeasible instead of failing.
//!
//! # Complexity
//!
//! O(n² + n·h log h) where n = centers, h = hubs.

use std::cmp::Ordering;

use crate::evaluation::Evaluator;
use crate::models::{Group, Solution};
use crate::search::SearchResult;
use crate::timer::Timer;

/// Builds a solution greedily and evaluates it once.
///
/// The trace holds the value of `seed` followed by the value of the
/// constructed solution. The constructed solution carries no treatment hub.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::constructive::cost_saving;
/// use u_hubloc::timer::Timer;
///
/// let centers = (0..4).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(4, vec![1.0; 6]).unwrap()).unwrap();
/// let config = HlaConfig::default().with_transfer_capacity(25.0);
/// let evaluator = Evaluator::new(&data, &config);
///
/// let mut timer = Timer::default();
/// timer.start();
/// let seed = Solution::new(vec![0, 1, 2, 3, -1]);
/// let result = cost_saving(&evaluator, &mut timer, &seed, 2);
/// assert!(result.best_value.is_finite());
/// assert_eq!(result.best.transfer_hubs().len(), 2);
/// ```
#[tracing::instrument(level = "debug", name = "Cost Saving", skip_all, fields(max_hubs = max_hubs))]
pub fn cost_saving(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    seed: &Solution,
    max_hubs: usize,
) -> SearchResult {
    let seed_value = evaluator.value(seed);
    let groups = build_groups(evaluator, max_hubs);

    let (value, solution) = evaluator.evaluate(Solution::from_groups(&groups));
    let aborted = timer.update();

    tracing::debug!(value, hubs = groups.len(), "constructed solution");

    SearchResult {
        best: solution,
        best_value: value,
        trace: vec![seed_value, value],
        aborted,
    }
}

/// Opens hubs and assigns centers.
fn build_groups(evaluator: &Evaluator<'_>, max_hubs: usize) -> Vec<Group> {
    let data = evaluator.data();
    let qt = evaluator.config().capacities.transfer;
    let n = data.num_centers();
    if n == 0 {
        return Vec::new();
    }

    let hubs = select_hubs(evaluator, max_hubs.clamp(1, n));

    let mut is_hub = vec![false; n];
    for &h in &hubs {
        is_hub[h] = true;
    }

    let mut groups: Vec<Group> = hubs.iter().map(|&h| Group::new(h, Vec::new())).collect();
    let mut loads: Vec<f64> = hubs.iter().map(|&h| data.waste(h)).collect();

    for center in (0..n).filter(|&c| !is_hub[c]) {
        let waste = data.waste(center);

        let mut candidates: Vec<(f64, usize)> = hubs
            .iter()
            .enumerate()
            .map(|(slot, &hub)| (data.distance(center, hub) * waste, slot))
            .collect();
        candidates.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| hubs[a.1].cmp(&hubs[b.1]))
        });

        let chosen = candidates
            .iter()
            .find(|&&(_, slot)| loads[slot] + waste <= qt)
            .unwrap_or(&candidates[0])
            .1;

        if loads[chosen] + waste > qt {
            tracing::warn!(center, "no transfer hub has room left, assigning to cheapest");
        }
        loads[chosen] += waste;
        groups[chosen].members.push(center);
    }

    groups
}

/// The `count` centers with the smallest weighted reach, ascending.
fn select_hubs(evaluator: &Evaluator<'_>, count: usize) -> Vec<usize> {
    let data = evaluator.data();
    let n = data.num_centers();

    let reach: Vec<f64> = (0..n)
        .map(|i| (0..n).map(|j| data.distance(i, j) * data.waste(j)).sum())
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| match reach[a].total_cmp(&reach[b]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    order.truncate(count);
    order
}
