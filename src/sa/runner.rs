//! SA execution loop.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::{cool, SaConfig};
use crate::evaluation::Evaluator;
use crate::models::Solution;
use crate::neighborhood::swap_neighborhood;
use crate::search::{create_rng, SearchResult};
use crate::timer::Timer;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution found.
    pub best: Solution,

    /// Value of the best solution.
    pub best_value: f64,

    /// Value of the current solution after every inner iteration.
    pub trace: Vec<f64>,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether the run ended because the time budget was spent.
    pub aborted: bool,
}

impl From<SaResult> for SearchResult {
    fn from(r: SaResult) -> Self {
        SearchResult {
            best: r.best,
            best_value: r.best_value,
            trace: r.trace,
            aborted: r.aborted,
        }
    }
}

/// Runs Simulated Annealing from `initial`.
///
/// Each inner iteration shuffles the full swap neighborhood of the current
/// solution and accepts the first neighbor with `Δ < 0`, or with
/// `random() < exp(-Δ/T)`. Comparisons involving an infeasible current
/// value never accept an infeasible neighbor.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::evaluation::Evaluator;
/// use u_hubloc::sa::{simulated_annealing, SaConfig};
/// use u_hubloc::timer::Timer;
///
/// let centers = (0..3).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(3, vec![1.0, 9.0, 9.0]).unwrap()).unwrap();
/// let config = HlaConfig::default();
/// let evaluator = Evaluator::new(&data, &config);
///
/// let mut timer = Timer::default();
/// timer.start();
/// let sa = SaConfig::default().with_alpha(0.5).with_seed(1);
/// let seed = Solution::new(vec![2, 0, 1, -1]);
/// let result = simulated_annealing(&evaluator, &mut timer, &seed, &sa);
/// assert!(result.best_value <= evaluator.value(&seed));
/// ```
#[tracing::instrument(
    level = "debug",
    name = "Simulated Annealing",
    skip_all,
    fields(t0 = config.initial_temperature, alpha = config.alpha)
)]
pub fn simulated_annealing(
    evaluator: &Evaluator<'_>,
    timer: &mut Timer,
    initial: &Solution,
    config: &SaConfig,
) -> SaResult {
    let mut rng = create_rng(config.seed);

    let (mut current_value, mut current) = evaluator.evaluate(initial.clone());
    let mut best = current.clone();
    let mut best_value = current_value;
    let mut trace = vec![current_value];

    let mut temperature = config.initial_temperature;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    let mut aborted = false;

    'cooling: while temperature > config.min_temperature {
        if timer.update() {
            aborted = true;
            break;
        }

        for _ in 0..config.iterations_per_temperature {
            let mut neighborhood = swap_neighborhood(current.assignment());
            neighborhood.shuffle(&mut rng);

            for assignment in neighborhood {
                if timer.update() {
                    aborted = true;
                    break 'cooling;
                }

                let candidate = current.with_assignment(assignment);
                let value = evaluator.value(&candidate);
                let delta = value - current_value;

                // NaN (both infeasible) fails both tests
                let improving = delta < 0.0;
                if improving || rng.random::<f64>() < (-delta / temperature).exp() {
                    accepted_moves += 1;
                    if improving {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_value = value;
                    if current_value < best_value {
                        tracing::debug!(value, temperature, "new best");
                        best = current.clone();
                        best_value = current_value;
                    }
                    break;
                }
            }

            trace.push(current_value);
        }

        temperature = cool(temperature, config.alpha);
    }

    SaResult {
        best,
        best_value,
        trace,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        aborted,
    }
}
