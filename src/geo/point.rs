//! Coordinate pair and service bounding box.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A (latitude, longitude) pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use depot_routes::geo::GeoPoint;
///
/// let depot = GeoPoint::new(9.9281, -84.0907);
/// let customer = GeoPoint::new(9.9350, -84.0800);
/// assert!(depot.distance_km(&customer) < 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from decimal-degree coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point in kilometers (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

/// The geographic rectangle a coordinate must fall within to count as valid
/// for a depot's service region.
///
/// # Examples
///
/// ```
/// use depot_routes::geo::{BoundingBox, GeoPoint};
///
/// let region = BoundingBox::new(8.0, 11.0, -86.0, -82.0);
/// assert!(region.contains(&GeoPoint::new(9.9281, -84.0907)));
/// assert!(!region.contains(&GeoPoint::new(45.0, -84.0907)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Creates a bounding box from inclusive degree limits.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// Returns `true` if the point falls within the box (limits inclusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
            && point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
    }
}
