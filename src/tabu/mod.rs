//! Tabu Search with recency and frequency memory.
//!
//! Explores the full swap neighborhood each iteration and always moves,
//! even uphill. Recently swapped entry pairs are tabu for a number of
//! iterations unless the move produces a new best (aspiration), and every
//! pair's swap count is added to the score of moves that repeat it.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::{SwapPair, TabuMemory};
pub use runner::tabu_search;
