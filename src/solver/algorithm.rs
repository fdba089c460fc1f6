//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bruteforce::bruteforce;
use crate::constructive::cost_saving;
use crate::error::{HlaError, HlaResult};
use crate::evaluation::Evaluator;
use crate::local_search::local_search;
use crate::models::Solution;
use crate::neighborhood::Operator;
use crate::sa::{simulated_annealing, SaConfig};
use crate::search::SearchResult;
use crate::tabu::{tabu_search, TabuConfig};
use crate::timer::Timer;
use crate::vns::{vnd, vns, VnsConfig};

/// A transfer-hub search algorithm together with its parameters.
///
/// Parsed from its display name with default parameters:
///
/// ```
/// use u_hubloc::solver::Algorithm;
/// use u_hubloc::neighborhood::Operator;
///
/// let algo: Algorithm = "Local Search (INSERTION)".parse().unwrap();
/// assert_eq!(algo, Algorithm::LocalSearch(Operator::Insertion));
/// assert_eq!(algo.to_string(), "Local Search (INSERTION)");
/// assert!("Genetic".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Exhaustive enumeration of the seed's arrangements.
    Bruteforce,
    /// Greedy construction.
    CostSaving,
    /// Best-improvement descent under one operator.
    LocalSearch(Operator),
    /// Variable Neighborhood Descent.
    Vnd,
    /// Variable Neighborhood Search.
    Vns(VnsConfig),
    /// Simulated Annealing.
    SimulatedAnnealing(SaConfig),
    /// Tabu Search.
    TabuSearch(TabuConfig),
}

impl Algorithm {
    /// Every algorithm with default parameters, in display order.
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Bruteforce,
            Algorithm::CostSaving,
            Algorithm::LocalSearch(Operator::Swap),
            Algorithm::LocalSearch(Operator::Insertion),
            Algorithm::Vnd,
            Algorithm::Vns(VnsConfig::default()),
            Algorithm::SimulatedAnnealing(SaConfig::default()),
            Algorithm::TabuSearch(TabuConfig::default()),
        ]
    }

    /// Checks the algorithm's parameters.
    pub fn validate(&self) -> HlaResult<()> {
        let checked = match self {
            Algorithm::Vns(config) => config.validate(),
            Algorithm::SimulatedAnnealing(config) => config.validate(),
            Algorithm::TabuSearch(config) => config.validate(),
            _ => Ok(()),
        };
        checked.map_err(HlaError::InvalidConfig)
    }

    /// Runs the algorithm from `initial`.
    ///
    /// Cost saving opens as many hubs as the evaluator's configuration
    /// allows for the instance.
    pub fn search(
        &self,
        evaluator: &Evaluator<'_>,
        timer: &mut Timer,
        initial: &Solution,
    ) -> SearchResult {
        match self {
            Algorithm::Bruteforce => bruteforce(evaluator, timer, initial),
            Algorithm::CostSaving => {
                let (_, max_hubs) = evaluator
                    .config()
                    .hub_bounds(evaluator.data().wastes());
                cost_saving(evaluator, timer, initial, max_hubs)
            }
            Algorithm::LocalSearch(operator) => local_search(evaluator, timer, initial, *operator),
            Algorithm::Vnd => vnd(evaluator, timer, initial),
            Algorithm::Vns(config) => vns(evaluator, timer, initial, config),
            Algorithm::SimulatedAnnealing(config) => {
                simulated_annealing(evaluator, timer, initial, config).into()
            }
            Algorithm::TabuSearch(config) => tabu_search(evaluator, timer, initial, config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bruteforce => f.write_str("Bruteforce"),
            Algorithm::CostSaving => f.write_str("Cost Saving"),
            Algorithm::LocalSearch(operator) => write!(f, "Local Search ({operator})"),
            Algorithm::Vnd => f.write_str("VND"),
            Algorithm::Vns(_) => f.write_str("VNS"),
            Algorithm::SimulatedAnnealing(_) => f.write_str("Simulated Annealing"),
            Algorithm::TabuSearch(_) => f.write_str("Tabu Search"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = HlaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algo| algo.to_string() == name)
            .ok_or_else(|| HlaError::UnknownAlgorithm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::models::{Center, HlaConfig, ProblemData};
    use std::time::Duration;

    #[test]
    fn test_names_round_trip() {
        for algo in Algorithm::all() {
            let parsed: Algorithm = algo.to_string().parse().expect("known name");
            assert_eq!(parsed, algo);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "Local Search (2-OPT)".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, HlaError::UnknownAlgorithm("Local Search (2-OPT)".into()));
    }

    #[test]
    fn test_name_is_case_sensitive() {
        assert!("vnd".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Algorithm::Vnd.validate().is_ok());
        let bad = Algorithm::SimulatedAnnealing(SaConfig::default().with_alpha(-1.0));
        assert!(matches!(bad.validate(), Err(HlaError::InvalidConfig(_))));
        let bad = Algorithm::TabuSearch(TabuConfig::default().with_max_iterations(0));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_dispatch_zero_budget_every_algorithm() {
        let centers = (0..4).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
        let table = DistanceTable::from_condensed(4, vec![1.0; 6]).expect("valid");
        let data = ProblemData::new(centers, table).expect("valid");
        let config = HlaConfig::default().with_transfer_capacity(25.0);
        let eval = Evaluator::new(&data, &config);
        let seed = Solution::new(vec![0, 1, -1, 2, 3, -1]);

        for algo in Algorithm::all() {
            let mut timer = Timer::new(Duration::ZERO);
            timer.start();
            let result = algo.search(&eval, &mut timer, &seed);
            assert!(result.aborted, "{algo} did not report the abort");
            assert!(timer.check(), "{algo} left the timer unchecked");
            assert!(result.best.validate(4).is_ok(), "{algo} broke the partition");
        }
    }
}
