//! Neighborhood operators over the assignment sequence.
//!
//! - [`swap_neighborhood`]: Exchange two positions, `C(L, 2)` neighbors
//! - [`insertion_neighborhood`]: Move one entry elsewhere, `(L - 1)²` neighbors
//! - [`percentage_swap_neighborhood`]: Exchange two blocks, used for shaking
//!
//! Every operator enumerates its full neighborhood eagerly and returns fresh
//! copies; the source assignment is never modified. Treatment hubs are not
//! touched.

mod insertion;
mod percentage_swap;
mod swap;

use serde::{Deserialize, Serialize};

use crate::models::Slot;

pub use insertion::{inserted, insertion_neighborhood};
pub use percentage_swap::{
    block_len, block_swapped, percentage_swap_neighborhood, DEFAULT_SHAKE_FRACTION,
};
pub use swap::{swap_neighborhood, swapped};

/// Descent operator selectable by local search and VND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Pairwise swap.
    Swap,
    /// Remove-and-reinsert.
    Insertion,
}

impl Operator {
    /// Operators in VND order.
    pub const ALL: [Operator; 2] = [Operator::Swap, Operator::Insertion];

    /// Enumerates the neighborhood of `assignment` under this operator.
    pub fn neighborhood(self, assignment: &[Slot]) -> Vec<Vec<Slot>> {
        match self {
            Operator::Swap => swap_neighborhood(assignment),
            Operator::Insertion => insertion_neighborhood(assignment),
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Swap => "SWAP",
            Operator::Insertion => "INSERTION",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
