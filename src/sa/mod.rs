//! Simulated Annealing (SA).
//!
//! Scans the swap neighborhood of the current solution in random order and
//! moves to the first neighbor that is better, or worse but accepted with
//! probability `exp(-Δ/T)`. The temperature follows a Lundy-Mees schedule.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{simulated_annealing, SaResult};
