//! Condensed symmetric distance table.

use serde::{Deserialize, Serialize};

use crate::error::{HlaError, HlaResult};
use crate::models::Center;

/// Maps an unordered pair of 1-based indices `i < j` to its slot in a
/// condensed upper-triangular sequence (no diagonal).
///
/// Pairs are laid out column by column: `(1,2), (1,3), (2,3), (1,4), ...`.
///
/// # Examples
///
/// ```
/// use u_hubloc::distance::condensed_index;
///
/// assert_eq!(condensed_index(1, 2), 0);
/// assert_eq!(condensed_index(1, 3), 1);
/// assert_eq!(condensed_index(2, 3), 2);
/// assert_eq!(condensed_index(1, 4), 3);
/// ```
#[inline]
pub fn condensed_index(i: usize, j: usize) -> usize {
    debug_assert!(1 <= i && i < j, "condensed_index expects 1 <= i < j");
    i + (j - 2) * (j - 1) / 2 - 1
}

/// Number of slots a condensed table over `size` items needs.
#[inline]
pub fn condensed_len(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

/// A symmetric distance table over `N` centers stored in condensed form.
///
/// Only the strict upper triangle is kept; the diagonal is implicitly zero.
///
/// # Examples
///
/// ```
/// use u_hubloc::distance::DistanceTable;
///
/// // Pairs (0,1), (0,2), (1,2)
/// let table = DistanceTable::from_condensed(3, vec![4.0, 7.0, 5.0]).unwrap();
/// assert_eq!(table.get(0, 2), 7.0);
/// assert_eq!(table.get(2, 0), 7.0);
/// assert_eq!(table.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct DistanceTable {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; deserialization goes through [`DistanceTable::from_condensed`].
#[derive(Deserialize)]
struct RawTable {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawTable> for DistanceTable {
    type Error = HlaError;

    fn try_from(raw: RawTable) -> HlaResult<Self> {
        DistanceTable::from_condensed(raw.size, raw.data)
    }
}

impl DistanceTable {
    /// Creates a table over `size` centers from a condensed sequence.
    ///
    /// Fails if `data.len()` is not `size * (size - 1) / 2`.
    pub fn from_condensed(size: usize, data: Vec<f64>) -> HlaResult<Self> {
        let expected = condensed_len(size);
        if data.len() != expected {
            return Err(HlaError::DistanceLength {
                size,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Builds a great-circle distance table from center coordinates.
    pub fn from_centers(centers: &[Center]) -> Self {
        let size = centers.len();
        let mut data = vec![0.0; condensed_len(size)];
        for j in 1..size {
            for i in 0..j {
                data[condensed_index(i + 1, j + 1)] = centers[i].distance_to(&centers[j]);
            }
        }
        Self { data, size }
    }

    /// Returns the distance between centers `a` and `b` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        assert!(
            a < self.size && b < self.size,
            "center index out of bounds: ({a}, {b}) for size {}",
            self.size
        );
        if a == b {
            return 0.0;
        }
        let (i, j) = if a < b { (a + 1, b + 1) } else { (b + 1, a + 1) };
        self.data[condensed_index(i, j)]
    }

    /// Number of centers covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no pair is stored (fewer than two centers).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw condensed sequence.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> DistanceTable {
        // (0,1)=1 (0,2)=2 (1,2)=3 (0,3)=4 (1,3)=5 (2,3)=6
        DistanceTable::from_condensed(4, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid")
    }

    #[test]
    fn test_get_pairs() {
        let t = sample();
        assert_eq!(t.get(0, 1), 1.0);
        assert_eq!(t.get(0, 2), 2.0);
        assert_eq!(t.get(1, 2), 3.0);
        assert_eq!(t.get(0, 3), 4.0);
        assert_eq!(t.get(1, 3), 5.0);
        assert_eq!(t.get(2, 3), 6.0);
    }

    #[test]
    fn test_diagonal_zero() {
        let t = sample();
        for i in 0..4 {
            assert_eq!(t.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = DistanceTable::from_condensed(4, vec![1.0; 5]).expect_err("short");
        assert_eq!(
            err,
            HlaError::DistanceLength {
                size: 4,
                expected: 6,
                actual: 5
            }
        );
        assert!(DistanceTable::from_condensed(4, vec![1.0; 7]).is_err());
    }

    #[test]
    fn test_deserialize_checks_length() {
        let err = serde_json::from_str::<DistanceTable>(r#"{"data":[1.0],"size":4}"#).unwrap_err();
        assert!(err.to_string().contains("needs 6 entries"), "{err}");

        let json = serde_json::to_string(&sample()).expect("serializable");
        let back: DistanceTable = serde_json::from_str(&json).expect("valid table");
        assert_eq!(back, sample());
    }

    #[test]
    fn test_single_center() {
        let t = DistanceTable::from_condensed(1, Vec::new()).expect("valid");
        assert!(t.is_empty());
        assert_eq!(t.get(0, 0), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        sample().get(0, 4);
    }

    #[test]
    fn test_from_centers() {
        let centers = vec![
            Center::new(0, 1.0, 0.0, 0.0),
            Center::new(1, 1.0, 1.0, 0.0),
            Center::new(2, 1.0, 2.0, 0.0),
        ];
        let t = DistanceTable::from_centers(&centers);
        assert_eq!(t.size(), 3);
        assert_eq!(t.len(), 3);
        assert!((t.get(0, 2) - 2.0 * t.get(0, 1)).abs() < 1e-6);
    }

    #[test]
    fn test_condensed_index_is_dense() {
        let n = 7;
        let mut seen = vec![false; condensed_len(n)];
        for j in 2..=n {
            for i in 1..j {
                let idx = condensed_index(i, j);
                assert!(!seen[idx], "slot {idx} used twice");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn prop_symmetric(values in proptest::collection::vec(0.0f64..1e4, 15), a in 0usize..6, b in 0usize..6) {
            let t = DistanceTable::from_condensed(6, values).unwrap();
            prop_assert_eq!(t.get(a, b), t.get(b, a));
            prop_assert!(t.get(a, b) >= 0.0);
            prop_assert_eq!(t.get(a, a), 0.0);
        }
    }
}
