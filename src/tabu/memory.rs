//! Recency and frequency memory for Tabu Search.

use std::collections::VecDeque;

use crate::distance::{condensed_index, condensed_len};
use crate::models::Slot;

/// Unordered pair of assignment entries exchanged by a swap.
///
/// Entries are shifted by one so the sentinel maps to slot 0 and center `c`
/// to slot `c + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwapPair {
    lo: usize,
    hi: usize,
}

impl SwapPair {
    /// Pair of the entries `a` and `b`, in either order.
    pub fn new(a: Slot, b: Slot) -> Self {
        let x = (a + 1) as usize;
        let y = (b + 1) as usize;
        Self {
            lo: x.min(y),
            hi: x.max(y),
        }
    }

    /// Shifted slots `(lo, hi)`, `lo <= hi`.
    pub fn slots(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

/// Short-term (recency) and long-term (frequency) memory.
///
/// The recency list is a FIFO of the last `tenure` pairs swapped. The
/// frequency table counts every swap per pair in a condensed triangle over
/// `n_centers + 1` slots; the sentinel-with-sentinel pair, which has no
/// off-diagonal slot, is counted separately.
///
/// # Examples
///
/// ```
/// use u_hubloc::tabu::{SwapPair, TabuMemory};
///
/// let mut memory = TabuMemory::new(4, 2);
/// let pair = SwapPair::new(0, -1);
/// memory.record(pair);
/// assert!(memory.is_tabu(pair));
/// assert_eq!(memory.frequency(pair), 1);
///
/// // Aspiration: a tabu move is still allowed if it beats the best
/// assert!(!memory.admits(pair, 10.0, 5.0));
/// assert!(memory.admits(pair, 4.0, 5.0));
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    recent: VecDeque<SwapPair>,
    tenure: usize,
    frequency: Vec<u32>,
    sentinel_swaps: u32,
}

impl TabuMemory {
    /// Creates empty memory for `n_centers` centers.
    pub fn new(n_centers: usize, tenure: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(tenure + 1),
            tenure,
            frequency: vec![0; condensed_len(n_centers + 1)],
            sentinel_swaps: 0,
        }
    }

    /// Whether `pair` is in the recency list.
    pub fn is_tabu(&self, pair: SwapPair) -> bool {
        self.recent.contains(&pair)
    }

    /// Number of times `pair` has been swapped.
    pub fn frequency(&self, pair: SwapPair) -> u32 {
        match self.slot(pair) {
            Some(idx) => self.frequency[idx],
            None => self.sentinel_swaps,
        }
    }

    /// A move is admissible if it is not tabu, or if its raw value beats
    /// the best value found so far.
    pub fn admits(&self, pair: SwapPair, value: f64, best_value: f64) -> bool {
        !self.is_tabu(pair) || value < best_value
    }

    /// Records a committed swap: pushes it onto the recency list (evicting
    /// the oldest entry beyond tenure) and bumps its frequency.
    pub fn record(&mut self, pair: SwapPair) {
        self.recent.push_back(pair);
        while self.recent.len() > self.tenure {
            self.recent.pop_front();
        }
        match self.slot(pair) {
            Some(idx) => self.frequency[idx] += 1,
            None => self.sentinel_swaps += 1,
        }
    }

    /// Pairs currently tabu, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = SwapPair> + '_ {
        self.recent.iter().copied()
    }

    fn slot(&self, pair: SwapPair) -> Option<usize> {
        let (lo, hi) = pair.slots();
        (lo < hi).then(|| condensed_index(lo + 1, hi + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(SwapPair::new(3, -1), SwapPair::new(-1, 3));
        assert_eq!(SwapPair::new(3, -1).slots(), (0, 4));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut memory = TabuMemory::new(5, 2);
        let (a, b, c) = (SwapPair::new(0, 1), SwapPair::new(1, 2), SwapPair::new(2, 3));
        memory.record(a);
        memory.record(b);
        memory.record(c);
        assert!(!memory.is_tabu(a));
        assert!(memory.is_tabu(b));
        assert!(memory.is_tabu(c));
        assert_eq!(memory.recent().collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn test_zero_tenure_never_tabu() {
        let mut memory = TabuMemory::new(3, 0);
        let pair = SwapPair::new(0, 2);
        memory.record(pair);
        assert!(!memory.is_tabu(pair));
        assert_eq!(memory.frequency(pair), 1);
    }

    #[test]
    fn test_frequency_slots_distinct() {
        let n = 4;
        let mut memory = TabuMemory::new(n, 1);
        let entries: Vec<Slot> = (-1..n as Slot).collect();
        for (k, &a) in entries.iter().enumerate() {
            for &b in &entries[k + 1..] {
                memory.record(SwapPair::new(a, b));
            }
        }
        for (k, &a) in entries.iter().enumerate() {
            for &b in &entries[k + 1..] {
                assert_eq!(memory.frequency(SwapPair::new(a, b)), 1, "pair ({a}, {b})");
            }
        }
        assert_eq!(memory.frequency(SwapPair::new(-1, -1)), 0);
    }

    #[test]
    fn test_sentinel_pair_counted_apart() {
        let mut memory = TabuMemory::new(2, 3);
        memory.record(SwapPair::new(-1, -1));
        memory.record(SwapPair::new(-1, -1));
        assert_eq!(memory.frequency(SwapPair::new(-1, -1)), 2);
        assert_eq!(memory.frequency(SwapPair::new(-1, 0)), 0);
    }

    #[test]
    fn test_aspiration() {
        let mut memory = TabuMemory::new(3, 5);
        let pair = SwapPair::new(1, 2);
        assert!(memory.admits(pair, 100.0, 50.0));
        memory.record(pair);
        assert!(!memory.admits(pair, 100.0, 50.0));
        assert!(!memory.admits(pair, 50.0, 50.0));
        assert!(memory.admits(pair, 49.0, 50.0));
    }
}
