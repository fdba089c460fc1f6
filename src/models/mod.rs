//! Domain model types for hub location-allocation.
//!
//! Provides the core abstractions: centers with waste volumes, the instance
//! data tying centers to their distances, cost/capacity configuration, and
//! the flat solution encoding with its group codec.

mod center;
mod config;
mod problem;
mod solution;

pub use center::Center;
pub use config::{CapacityConfig, CostConfig, HlaConfig};
pub use problem::ProblemData;
pub use solution::{decode_groups, encode_groups, Group, Slot, Solution, SENTINEL};
