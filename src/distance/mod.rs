//! Pairwise distances between centers.
//!
//! Provides a condensed symmetric distance table.

mod table;

pub use table::{condensed_index, condensed_len, DistanceTable};
