//! # u-hubloc
//!
//! Two-echelon hub location-allocation. Collection centers are grouped
//! around transfer hubs, and one treatment hub receives the load of every
//! other transfer hub. The library provides the instance model, the cost
//! evaluator and a family of constructive heuristics and metaheuristics
//! that search the hub assignment under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`]: Centers, cost configuration, instance data, solution encoding
//! - [`distance`]: Symmetric distance table from condensed or coordinate input
//! - [`evaluation`]: Feasibility and total cost of a solution
//! - [`neighborhood`]: Swap, insertion and block-swap neighborhoods
//! - [`constructive`]: Cost-saving construction and random seeds
//! - [`local_search`]: Best-improvement descent
//! - [`vns`]: Variable Neighborhood Descent and Search
//! - [`sa`]: Simulated Annealing
//! - [`tabu`]: Tabu Search with frequency memory
//! - [`bruteforce`]: Exhaustive enumeration for tiny instances
//! - [`solver`]: Algorithm dispatch and the two-phase solve
//! - [`timer`]: Wall-clock budget shared by every search
//!
//! ## Example
//!
//! ```
//! use u_hubloc::distance::DistanceTable;
//! use u_hubloc::models::{Center, HlaConfig, ProblemData, Solution};
//! use u_hubloc::solver::{Algorithm, HlaSolver};
//!
//! let centers = (0..4).map(|i| Center::new(i, 10.0, 0.0, 0.0)).collect();
//! let table = DistanceTable::from_condensed(4, vec![1.0, 5.0, 5.0, 5.0, 5.0, 1.0]).unwrap();
//! let data = ProblemData::new(centers, table).unwrap();
//!
//! let config = HlaConfig::default().with_transfer_capacity(25.0);
//! let mut solver = HlaSolver::new(&data, config).unwrap();
//! let seed = Solution::new(vec![0, 1, 2, 3, -1, -1]);
//! let report = solver.solve(&seed, &Algorithm::Vnd).unwrap();
//! assert!(report.is_feasible());
//! ```

pub mod bruteforce;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod neighborhood;
pub mod sa;
pub mod search;
pub mod solver;
pub mod tabu;
pub mod timer;
pub mod vns;

pub use error::{HlaError, HlaResult};
