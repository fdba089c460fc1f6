//! Variable Neighborhood Descent and Variable Neighborhood Search.
//!
//! Both cycle through the descent operators `[Swap, Insertion]`: after a
//! local search that improves the incumbent they return to the first
//! operator, otherwise they advance to the next one, and they stop once
//! every operator has failed in a row. VNS additionally shakes the
//! incumbent with a random block swap before each local search.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{shake, vnd, vns};
