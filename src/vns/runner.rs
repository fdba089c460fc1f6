//! VND and VNS execution.
//!
//! # Algorithm (VND)
//!
//! 1. Evaluate the seed x, set k = 1
//! 2. While k ≤ number of operators:
//!    a. **Local search**: descend from x under operator k → x'
//!    b. **Move or not**: if f(x') < f(x), set x = x' and k = 1;
//!    otherwise k = k + 1
//! 3. Return x
//!
//! VNS inserts a **shaking** step before 2a: x is replaced by a uniformly
//! random block swap neighbor of the incumbent, and the local search starts
//! from there. The incumbent only moves when the search beats it.
//!
//! Shaking always starts from the incumbent, never from the previous shaken
//! point, so failed rounds do not let the search drift away from the best
//! solution known.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::config::VnsConfig;
use crate::evaluation::Evaluator;
use crate::local_search::local_search;
use crate::models::{Slot, Solution};
use crate::neighborhood::{percentage_swap_neighborhood, Operator};
use crate::search::{create_rng, SearchResult};
use crate::timer::Timer;

/// Picks a uniformly random block swap neighbor of `assignment`.
///
/// Returns a copy of `assignment` when the neighborhood is empty.
pub fn shake<R: Rng>(assignment: &[Slot], fraction: f64, rng: &mut R) -> Vec<Slot> {
    percentage_swap_neighborhood(assignment, fraction)
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| assignment.to_vec())
}

/// Variable Neighborhood Descent from `initial`.
///
/// The trace is the start value followed by the traces of every local
/// search, in order.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::timer::Timer;
/// use u_hubloc::vns::vnd;
///
/// let centers = (0..3).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(3, vec![1.0, 9.0, 9.0]).unwrap()).unwrap();
/// let config = HlaConfig::default();
/// let evaluator = Evaluator::new(&data, &config);
///
/// let mut timer = Timer::default();
/// timer.start();
/// let result = vnd(&evaluator, &mut timer, &Solution::new(vec![2, 0, 1, -1]));
/// assert!(result.best_value.is_finite());
/// ```
#[tracing::instrument(level = "debug", name = "VND", skip_all)]
pub fn vnd(evaluator: &Evaluator<'_>, timer: &mut Timer, initial: &Solution) -> SearchResult {
    descend(evaluator, timer, initial, |current| current.clone())
}

/// Variable Neighborhood Search from `initial`.
///
/// Like [`vnd`], but every local search starts from a shaken copy of the
/// incumbent.
#[tracing::instrument(level = "debug", name = "VNS", skip_all, fields(seed = ?config.seed))]
pub fn vns(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    initial: &Solution,
    config: &VnsConfig,
) -> SearchResult {
    let mut rng = create_rng(config.seed);
    descend(evaluator, timer, initial, |current| {
        current.with_assignment(shake(current.assignment(), config.shake_fraction, &mut rng))
    })
}

/// Operator cycle shared by VND and VNS; `perturb` builds the start point of
/// each local search from the incumbent.
fn descend<F>(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    initial: &Solution,
    mut perturb: F,
) -> SearchResult
where
    F: FnMut(&Solution) -> Solution,
{
    let (mut current_value, mut current) = evaluator.evaluate(initial.clone());
    let mut trace = vec![current_value];
    let mut aborted = false;
    let mut k = 0;

    while k < Operator::ALL.len() {
        if timer.update() {
            aborted = true;
            break;
        }

        let start = perturb(&current);
        let result = local_search(evaluator, timer, &start, Operator::ALL[k]);
        trace.extend_from_slice(&result.trace);

        if result.best_value < current_value {
            tracing::debug!(
                value = result.best_value,
                operator = %Operator::ALL[k],
                "incumbent improved"
            );
            current_value = result.best_value;
            current = result.best;
            k = 0;
        } else {
            k += 1;
        }

        if result.aborted {
            aborted = true;
            break;
        }
    }

    SearchResult {
        best: current,
        best_value: current_value,
        trace,
        aborted,
    }
}
