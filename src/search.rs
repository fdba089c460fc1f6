//! Common result type and helpers shared by every search algorithm.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::Solution;

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best solution found.
    pub best: Solution,
    /// Value of the best solution (`f64::INFINITY` if none was feasible).
    pub best_value: f64,
    /// Objective values recorded once per iteration.
    pub trace: Vec<f64>,
    /// Whether the run ended because the time budget was spent.
    pub aborted: bool,
}

impl SearchResult {
    /// Running minimum of the trace, the best-known value after each
    /// recorded iteration.
    pub fn best_history(&self) -> Vec<f64> {
        best_history(&self.trace)
    }
}

/// Running minimum of a value trace.
///
/// # Examples
///
/// ```
/// use u_hubloc::search::best_history;
///
/// let best = best_history(&[f64::INFINITY, 5.0, 7.0, 3.0]);
/// assert_eq!(best, vec![f64::INFINITY, 5.0, 5.0, 3.0]);
/// ```
pub fn best_history(trace: &[f64]) -> Vec<f64> {
    trace
        .iter()
        .scan(f64::INFINITY, |best, &v| {
            if v < *best {
                *best = v;
            }
            Some(*best)
        })
        .collect()
}

/// Creates the search RNG, seeded for reproducibility when a seed is given.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_best_history_empty() {
        assert!(best_history(&[]).is_empty());
    }

    #[test]
    fn test_best_history_non_increasing() {
        let trace = [9.0, 4.0, 6.0, f64::INFINITY, 2.0, 2.0, 8.0];
        let best = best_history(&trace);
        assert_eq!(best, vec![9.0, 4.0, 4.0, 4.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_create_rng_seeded() {
        let mut a = create_rng(Some(7));
        let mut b = create_rng(Some(7));
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
