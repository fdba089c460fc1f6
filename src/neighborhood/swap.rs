//! Pairwise swap neighborhood.
//!
//! Exchanges the entries at two positions of the assignment. Swapping a
//! center with a sentinel moves a group boundary; swapping two centers
//! exchanges their groups (or their roles as hub and member).

use crate::models::Slot;

/// Returns a copy of `assignment` with positions `i` and `j` exchanged.
#[inline]
pub fn swapped(assignment: &[Slot], i: usize, j: usize) -> Vec<Slot> {
    let mut neighbor = assignment.to_vec();
    neighbor.swap(i, j);
    neighbor
}

/// Enumerates every swap neighbor: one per position pair `i < j`, in
/// row-major order, `C(L, 2)` in total.
///
/// # Examples
///
/// ```
/// use u_hubloc::neighborhood::swap_neighborhood;
///
/// let n = swap_neighborhood(&[0, 1, -1]);
/// assert_eq!(n, vec![vec![1, 0, -1], vec![-1, 1, 0], vec![0, -1, 1]]);
/// ```
pub fn swap_neighborhood(assignment: &[Slot]) -> Vec<Vec<Slot>> {
    let len = assignment.len();
    let mut neighbors = Vec::with_capacity(len * len.saturating_sub(1) / 2);
    for i in 0..len.saturating_sub(1) {
        for j in (i + 1)..len {
            neighbors.push(swapped(assignment, i, j));
        }
    }
    neighbors
}
