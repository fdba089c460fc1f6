//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the seed
//! 2. At each iteration:
//!    a. Enumerate every swap of the current assignment
//!    b. Score each neighbor as its value plus the frequency count of the
//!       swapped pair
//!    c. Drop neighbors whose pair is tabu, unless they beat the best value
//!       (aspiration)
//!    d. Move to the lowest-scored survivor unconditionally; record its pair
//!    e. Update the global best if improved
//! 3. Terminate after `max_iterations` or when the time budget is spent
//!
//! Ties are broken by raw value, then by the swapped entries, then by the
//! neighbor assignment itself. If every neighbor is tabu the lowest-scored
//! neighbor overall is taken.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::cmp::Ordering;

use super::config::TabuConfig;
use super::memory::{SwapPair, TabuMemory};
use crate::evaluation::Evaluator;
use crate::models::{Slot, Solution};
use crate::neighborhood::swapped;
use crate::search::SearchResult;
use crate::timer::Timer;

/// A scored swap neighbor.
#[derive(Debug, Clone)]
struct Candidate {
    penalized: f64,
    value: f64,
    moved: (Slot, Slot),
    pair: SwapPair,
    solution: Solution,
}

impl Candidate {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.penalized
            .total_cmp(&other.penalized)
            .then(self.value.total_cmp(&other.value))
            .then(self.moved.cmp(&other.moved))
            .then_with(|| self.solution.assignment().cmp(other.solution.assignment()))
    }
}

fn keep_min(slot: &mut Option<Candidate>, candidate: &Candidate) {
    let better = match slot {
        Some(current) => candidate.cmp_key(current) == Ordering::Less,
        None => true,
    };
    if better {
        *slot = Some(candidate.clone());
    }
}

/// Runs Tabu Search from `initial`.
///
/// The trace is the start value followed by the value of the current
/// solution after every iteration.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::tabu::{tabu_search, TabuConfig};
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
/// let tabu = TabuConfig::default().with_max_iterations(20);
/// let result = tabu_search(&evaluator, &mut timer, &seed, &tabu);
/// assert_eq!(result.trace.len(), 21);
/// assert!(result.best_value < evaluator.value(&seed));
/// ```
#[tracing::instrument(
    level = "debug",
    name = "Tabu Search",
    skip_all,
    fields(max_iterations = config.max_iterations)
)]
pub fn tabu_search(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    initial: &Solution,
    config: &TabuConfig,
) -> SearchResult {
    let (mut current_value, mut current) = evaluator.evaluate(initial.clone());
    let mut best = current.clone();
    let mut best_value = current_value;
    let mut trace = vec![current_value];

    let tenure = config.tenure_for(current.assignment().len());
    let mut memory = TabuMemory::new(evaluator.data().num_centers(), tenure);
    let mut aborted = false;

    for iteration in 0..config.max_iterations {
        if timer.update() {
            aborted = true;
            break;
        }

        let assignment = current.assignment();
        let len = assignment.len();
        let mut admitted: Option<Candidate> = None;
        let mut overall: Option<Candidate> = None;

        for i in 0..len.saturating_sub(1) {
            for j in i + 1..len {
                let pair = SwapPair::new(assignment[i], assignment[j]);
                let solution = current.with_assignment(swapped(assignment, i, j));
                let value = evaluator.value(&solution);
                let candidate = Candidate {
                    penalized: value + f64::from(memory.frequency(pair)),
                    value,
                    moved: (assignment[i], assignment[j]),
                    pair,
                    solution,
                };

                if memory.admits(pair, value, best_value) {
                    keep_min(&mut admitted, &candidate);
                }
                keep_min(&mut overall, &candidate);
            }
        }

        let chosen = match (admitted, overall) {
            (Some(c), _) => c,
            (None, Some(c)) => {
                tracing::debug!(iteration, "every move tabu, taking the best overall");
                c
            }
            (None, None) => break,
        };

        current = chosen.solution;
        current_value = chosen.value;
        trace.push(current_value);

        if current_value < best_value {
            tracing::debug!(iteration, value = current_value, "new best");
            best = current.clone();
            best_value = current_value;
        }

        memory.record(chosen.pair);
    }

    SearchResult {
        best,
        best_value,
        trace,
        aborted,
    }
}
