//! Exhaustive enumeration baseline.
//!
//! # Algorithm
//!
//! For every center as treatment hub, enumerate the permutations of
//! `[sentinel] + assignment` in positional-lexicographic order and evaluate
//! each one that starts with the prepended sentinel, with that leading
//! sentinel dropped. Enumeration for a hub stops at the first permutation
//! that no longer starts with it.
//!
//! Only arrangements of the seed's own entries are visited, so seeds with
//! too few sentinels cannot reach solutions with more hubs.
//!
//! # Complexity
//!
//! O(N · L!) evaluations, L = assignment length. Practical only for very
//! small instances; the time budget bounds it otherwise.

use itertools::Itertools;

use crate::evaluation::Evaluator;
use crate::models::{Slot, Solution, SENTINEL};
use crate::search::SearchResult;
use crate::timer::Timer;

/// Enumerates arrangements of `initial` for every treatment hub.
///
/// The trace holds the value of every evaluated arrangement, in order. The
/// best value starts from the value of `initial`.
///
/// # Examples
///
/// ```
/// use u_hubloc::bruteforce::bruteforce;
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::timer::Timer;
///
/// let centers = (0..3).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(3, vec![1.0, 9.0, 9.0]).unwrap()).unwrap();
/// let config = HlaConfig::default();
/// let evaluator = Evaluator::new(&data, &config);
///
/// let mut timer = Timer::default();
/// timer.start();
/// let result = bruteforce(&evaluator, &mut timer, &Solution::new(vec![2, 0, 1, -1]));
/// // 3 hubs × 4! arrangements
/// assert_eq!(result.trace.len(), 72);
/// assert!(result.best.treatment_hub().is_some());
/// ```
#[tracing::instrument(level = "debug", name = "Bruteforce", skip_all)]
pub fn bruteforce(evaluator: &Evaluator<'_>, timer: &mut Timer, initial: &Solution) -> SearchResult {
    let (mut best_value, mut best) = evaluator.evaluate(initial.clone());
    let mut trace = Vec::new();

    let pool: Vec<Slot> = std::iter::once(SENTINEL)
        .chain(initial.assignment().iter().copied())
        .collect();

    for hub in 0..evaluator.data().num_centers() {
        let mut evaluated = false;

        for perm in pool.iter().copied().permutations(pool.len()) {
            if timer.update() {
                return SearchResult {
                    best,
                    best_value,
                    trace,
                    aborted: true,
                };
            }

            if perm[0] != SENTINEL {
                if evaluated {
                    break;
                }
                continue;
            }
            evaluated = true;

            let candidate = Solution::from_parts(vec![hub], perm[1..].to_vec());
            let value = evaluator.value(&candidate);
            if value < best_value {
                tracing::debug!(hub, value, "new best");
                best = candidate;
                best_value = value;
            }
            trace.push(value);
        }
    }

    SearchResult {
        best,
        best_value,
        trace,
        aborted: false,
    }
}
