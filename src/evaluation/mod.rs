//! Solution evaluation.
//!
//! Provides the shared cost function every search algorithm relies on.

mod evaluator;

pub use evaluator::{CostBreakdown, Evaluator};
