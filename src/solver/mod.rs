//! Algorithm dispatch and the two-phase solver.

mod algorithm;
mod hla;

pub use algorithm::Algorithm;
pub use hla::{HlaSolver, SolveReport};
