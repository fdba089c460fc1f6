//! Block swap neighborhood used for shaking.
//!
//! Exchanges two non-overlapping blocks of `floor(p × L)` consecutive
//! entries. Blocks start at `i` and `j >= i + 1 + n` and both lie fully
//! inside the assignment. With a block length of zero every neighbor equals
//! the source.

use crate::models::Slot;

/// Default fraction of the assignment moved by one block swap.
pub const DEFAULT_SHAKE_FRACTION: f64 = 0.2;

/// Block length for an assignment of length `len` and fraction `p`.
#[inline]
pub fn block_len(len: usize, p: f64) -> usize {
    (p * len as f64).floor().max(0.0) as usize
}

/// Returns a copy of `assignment` with the blocks of length `n` starting at
/// `i` and `j` exchanged (`i + n < j`, `j + n <= len`).
pub fn block_swapped(assignment: &[Slot], i: usize, j: usize, n: usize) -> Vec<Slot> {
    let mut neighbor = assignment.to_vec();
    let (left, right) = neighbor.split_at_mut(j);
    left[i..i + n].swap_with_slice(&mut right[..n]);
    neighbor
}

/// Enumerates every block swap neighbor for fraction `p`.
///
/// # Examples
///
/// ```
/// use u_hubloc::neighborhood::percentage_swap_neighborhood;
///
/// // L = 5, p = 0.4 → blocks of 2: (0, 3) is the only placement
/// let n = percentage_swap_neighborhood(&[0, 1, -1, 2, 3], 0.4);
/// assert_eq!(n, vec![vec![2, 3, -1, 0, 1]]);
/// ```
pub fn percentage_swap_neighborhood(assignment: &[Slot], p: f64) -> Vec<Vec<Slot>> {
    let len = assignment.len();
    let n = block_len(len, p);
    let mut neighbors = Vec::new();
    for i in 0..len {
        let first_j = i + 1 + n;
        for j in first_j..len {
            if j + n > len {
                break;
            }
            neighbors.push(block_swapped(assignment, i, j, n));
        }
    }
    neighbors
}
