//! Random seed solutions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Slot, Solution, SENTINEL};

/// Builds a random seed: the centers and `n_sentinels` sentinels shuffled
/// together, and a random center designated as treatment hub.
///
/// The result always satisfies the partition invariant but is often
/// infeasible.
///
/// # Examples
///
/// ```
/// use u_hubloc::constructive::random_solution;
/// use u_hubloc::search::create_rng;
///
/// let mut rng = create_rng(Some(42));
/// let sol = random_solution(6, 3, &mut rng);
/// assert_eq!(sol.assignment().len(), 9);
/// assert!(sol.validate(6).is_ok());
/// ```
pub fn random_solution<R: Rng>(n_centers: usize, n_sentinels: usize, rng: &mut R) -> Solution {
    let mut assignment: Vec<Slot> = (0..n_centers as Slot)
        .chain(std::iter::repeat_n(SENTINEL, n_sentinels))
        .collect();
    assignment.shuffle(rng);

    let solution = Solution::new(assignment);
    if n_centers == 0 {
        return solution;
    }
    solution.with_treatment_hub(rng.random_range(0..n_centers))
}
