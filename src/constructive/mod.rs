//! Constructive heuristics for building initial HLA solutions.
//!
//! - [`cost_saving`]: Greedy hub opening by weighted reach, then cheapest
//!   feasible assignment, O(n²)
//! - [`random_solution`]: Shuffled centers with trailing sentinels, used as
//!   a search seed

mod cost_saving;
mod random;

pub use cost_saving::cost_saving;
pub use random::random_solution;
