//! Waste-generating center.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A waste-generating center (municipality) in a hub location problem.
///
/// Every center is a candidate transfer hub and a candidate treatment hub.
/// Identifiers run from `0` to `N-1` in table order.
///
/// # Examples
///
/// ```
/// use u_hubloc::models::Center;
///
/// let c = Center::new(3, 1250.0, 40.41, -3.70).with_name("Madrid");
/// assert_eq!(c.id(), 3);
/// assert_eq!(c.waste(), 1250.0);
/// assert_eq!(c.name(), Some("Madrid"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    id: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    waste: f64,
    latitude: f64,
    longitude: f64,
}

impl Center {
    /// Creates a new center.
    pub fn new(id: usize, waste: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: None,
            waste,
            latitude,
            longitude,
        }
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Center ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Waste generated at this center.
    pub fn waste(&self) -> f64 {
        self.waste
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle (haversine) distance to another center, in kilometres.
    pub fn distance_to(&self, other: &Center) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}
