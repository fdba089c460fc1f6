//! Local search for improving HLA solutions.
//!
//! - [`local_search`]: Best-improvement descent under one
//!   [`Operator`](crate::neighborhood::Operator), O(L²) per step

mod descent;

pub use descent::local_search;
