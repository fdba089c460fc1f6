//! Problem instance data.

use serde::Deserialize;

use super::Center;
use crate::distance::DistanceTable;
use crate::error::{HlaError, HlaResult};

/// Input data of a hub location-allocation instance: the centers and the
/// pairwise distances between them.
///
/// Built once and only read afterwards; a single instance can back any
/// number of evaluators and searches.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::{Center, ProblemData};
/// use u_hubloc::distance::DistanceTable;
///
/// let centers = vec![
///     Center::new(0, 10.0, 0.0, 0.0),
///     Center::new(1, 20.0, 0.0, 1.0),
/// ];
/// let distances = DistanceTable::from_condensed(2, vec![3.5]).unwrap();
/// let data = ProblemData::new(centers, distances).unwrap();
/// assert_eq!(data.num_centers(), 2);
/// assert_eq!(data.total_waste(), 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemData {
    centers: Vec<Center>,
    distances: DistanceTable,
    wastes: Vec<f64>,
}

#[derive(Deserialize)]
struct RawInstance {
    centers: Vec<Center>,
    distances: Vec<f64>,
}

impl ProblemData {
    /// Creates an instance, checking that the table covers every center.
    pub fn new(centers: Vec<Center>, distances: DistanceTable) -> HlaResult<Self> {
        if centers.len() != distances.size() {
            return Err(HlaError::SizeMismatch {
                centers: centers.len(),
                distances: distances.size(),
            });
        }
        if let Some((pos, c)) = centers.iter().enumerate().find(|(i, c)| c.id() != *i) {
            return Err(HlaError::Parse(format!(
                "center at position {pos} has id {}, ids must follow table order",
                c.id()
            )));
        }
        let wastes = centers.iter().map(Center::waste).collect();
        Ok(Self {
            centers,
            distances,
            wastes,
        })
    }

    /// Creates an instance whose distances are the great-circle distances
    /// between center coordinates.
    pub fn from_coordinates(centers: Vec<Center>) -> HlaResult<Self> {
        let distances = DistanceTable::from_centers(&centers);
        Self::new(centers, distances)
    }

    /// Parses an instance from JSON.
    ///
    /// ```json
    /// { "centers": [{"id": 0, "waste": 10.0, "latitude": 0.0, "longitude": 0.0}, ...],
    ///   "distances": [1.5, ...] }
    /// ```
    ///
    /// `distances` is the condensed sequence described in
    /// [`condensed_index`](crate::distance::condensed_index).
    pub fn from_json(json: &str) -> HlaResult<Self> {
        let raw: RawInstance = serde_json::from_str(json)?;
        let distances = DistanceTable::from_condensed(raw.centers.len(), raw.distances)?;
        Self::new(raw.centers, distances)
    }

    /// All centers in table order.
    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    /// Number of centers.
    pub fn num_centers(&self) -> usize {
        self.centers.len()
    }

    /// The distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Distance between two centers.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distances.get(a, b)
    }

    /// Waste of a center.
    #[inline]
    pub fn waste(&self, center: usize) -> f64 {
        self.wastes[center]
    }

    /// Waste of every center, in table order.
    pub fn wastes(&self) -> &[f64] {
        &self.wastes
    }

    /// Total waste over all centers.
    pub fn total_waste(&self) -> f64 {
        self.wastes.iter().sum()
    }
}
