//! Insertion neighborhood.
//!
//! Removes the entry at position `i` and reinserts it at position `j` of the
//! shortened sequence, keeping the relative order of everything else. Pairs
//! with `i == j` reproduce the source and pairs with `i == j + 1` repeat the
//! adjacent exchange already produced by `(j, i)`; both are skipped.

use crate::models::Slot;

/// Returns a copy of `assignment` with the entry at `from` moved to `to`.
#[inline]
pub fn inserted(assignment: &[Slot], from: usize, to: usize) -> Vec<Slot> {
    let mut neighbor = assignment.to_vec();
    let slot = neighbor.remove(from);
    neighbor.insert(to, slot);
    neighbor
}

/// Enumerates every insertion neighbor, `(L - 1)²` in total.
///
/// # Examples
///
/// ```
/// use u_hubloc::neighborhood::insertion_neighborhood;
///
/// let n = insertion_neighborhood(&[0, 1, 2]);
/// assert_eq!(n.len(), 4);
/// assert!(n.contains(&vec![1, 2, 0]));
/// assert!(n.contains(&vec![2, 0, 1]));
/// ```
pub fn insertion_neighborhood(assignment: &[Slot]) -> Vec<Vec<Slot>> {
    let len = assignment.len();
    let mut neighbors = Vec::with_capacity(len.saturating_sub(1).pow(2));
    for i in 0..len {
        for j in 0..len {
            if i != j && i != j + 1 {
                neighbors.push(inserted(assignment, i, j));
            }
        }
    }
    neighbors
}
