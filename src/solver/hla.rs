//! Two-phase HLA solver.
//!
//! 1. **Transfer hubs**: the selected [`Algorithm`] optimizes the assignment
//!    with no treatment hub designated.
//! 2. **Treatment hub**: every center is tried as treatment hub for the
//!    phase-1 assignment; the cheapest wins, center 0 on ties.
//!
//! Both phases share one time budget. Phase 2 always runs, even after phase 1
//! was cut short.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::algorithm::Algorithm;
use crate::error::{HlaError, HlaResult};
use crate::evaluation::Evaluator;
use crate::models::{Group, HlaConfig, ProblemData, Solution};
use crate::timer::Timer;

/// Outcome of [`HlaSolver::solve`].
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Name of the algorithm that ran phase 1.
    pub algorithm: String,
    /// Best complete solution.
    pub solution: Solution,
    /// Its value (`f64::INFINITY` if infeasible).
    pub value: f64,
    /// Phase-1 trace.
    pub transfer_history: Vec<f64>,
    /// Phase-2 value for each candidate treatment hub, in center order.
    pub treatment_history: Vec<f64>,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Whether the time budget ran out.
    pub aborted: bool,
}

impl SolveReport {
    /// Whether the solution is feasible.
    pub fn is_feasible(&self) -> bool {
        self.value.is_finite()
    }

    /// Groups of the solution, one per transfer hub.
    pub fn groups(&self) -> Vec<Group> {
        self.solution.groups()
    }
}

/// Solver for one HLA instance.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
/// use u_hubloc::distance::DistanceTable;
/// use u_hubloc::solver::{Algorithm, HlaSolver};
///
/// let centers = (0..4).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
/// let data = ProblemData::new(centers, DistanceTable::from_condensed(4, vec![1.0; 6]).unwrap()).unwrap();
/// let config = HlaConfig::default().with_transfer_capacity(25.0);
///
/// let mut solver = HlaSolver::new(&data, config).unwrap();
/// assert_eq!(solver.hub_bounds(), (2, 4));
///
/// let seed = Solution::new(vec![0, 1, 2, 3, -1, -1]);
/// let report = solver.solve(&seed, &Algorithm::CostSaving).unwrap();
/// assert!(report.is_feasible());
/// assert!(report.solution.treatment_hub().is_some());
/// ```
#[derive(Debug)]
pub struct HlaSolver<'a> {
    data: &'a ProblemData,
    config: HlaConfig,
    min_hubs: usize,
    max_hubs: usize,
    timer: Timer,
}

impl<'a> HlaSolver<'a> {
    /// Creates a solver, rejecting invalid configurations.
    pub fn new(data: &'a ProblemData, config: HlaConfig) -> HlaResult<Self> {
        config.validate().map_err(HlaError::InvalidConfig)?;
        let (min_hubs, max_hubs) = config.hub_bounds(data.wastes());
        let timer = Timer::new(config.max_time);
        Ok(Self {
            data,
            config,
            min_hubs,
            max_hubs,
            timer,
        })
    }

    /// Capacity lower bound and allowed upper bound on transfer hubs.
    pub fn hub_bounds(&self) -> (usize, usize) {
        (self.min_hubs, self.max_hubs)
    }

    /// Instance data.
    pub fn data(&self) -> &'a ProblemData {
        self.data
    }

    /// Cost and capacity configuration.
    pub fn config(&self) -> &HlaConfig {
        &self.config
    }

    /// An evaluator over this solver's instance and configuration.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(self.data, &self.config)
    }

    /// Sets the time budget of later solves.
    pub fn set_timer(&mut self, max_time: Duration) {
        self.config.max_time = max_time;
        self.timer.set(max_time);
    }

    /// Runs both phases from `initial`.
    ///
    /// Fails only on malformed input; budget exhaustion is reported through
    /// [`SolveReport::aborted`].
    #[tracing::instrument(level = "debug", skip_all, fields(algorithm = %algorithm))]
    pub fn solve(&mut self, initial: &Solution, algorithm: &Algorithm) -> HlaResult<SolveReport> {
        let n = self.data.num_centers();
        initial.validate(n)?;
        algorithm.validate()?;

        self.timer.reset();
        self.timer.start();

        let evaluator = Evaluator::new(self.data, &self.config);

        let seed = initial.clone().without_treatment_hub();
        let phase1 = algorithm.search(&evaluator, &mut self.timer, &seed);
        tracing::debug!(value = phase1.best_value, "transfer hubs optimized");

        let assignment = phase1.best.assignment().to_vec();
        let mut treatment_history = Vec::with_capacity(n);
        let mut best: Option<(f64, Solution)> = None;
        for hub in 0..n {
            let candidate = Solution::from_parts(vec![hub], assignment.clone());
            let value = evaluator.value(&candidate);
            treatment_history.push(value);
            match &best {
                Some((best_value, _)) if value >= *best_value => {}
                _ => best = Some((value, candidate)),
            }
        }
        let (value, solution) =
            best.unwrap_or_else(|| (evaluator.value(&phase1.best), phase1.best.clone()));

        let elapsed = self.timer.stop();
        let aborted = self.timer.check() || phase1.aborted;
        if aborted {
            tracing::warn!(
                algorithm = %algorithm,
                ?elapsed,
                value,
                "optimization aborted, time budget spent"
            );
        } else {
            tracing::info!(algorithm = %algorithm, ?elapsed, value, "optimization finished");
        }

        Ok(SolveReport {
            algorithm: algorithm.to_string(),
            solution,
            value,
            transfer_history: phase1.trace,
            treatment_history,
            elapsed,
            aborted,
        })
    }
}

impl fmt::Display for HlaSolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HLA problem: {} centers, {}-{} transfer hubs",
            self.data.num_centers(),
            self.min_hubs,
            self.max_hubs
        )
    }
}
