//! Route and stop types.

use serde::{Deserialize, Serialize};

use super::CustomerRecord;

/// A routable candidate: one customer row with its capacity volume and its
/// great-circle distance to the depot reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// The underlying customer row.
    pub record: CustomerRecord,
    /// Volume counted against the route's capacity.
    pub volume: f64,
    /// Distance to the depot reference point in kilometers.
    pub distance_km: f64,
}

impl RouteStop {
    /// Customer id of the underlying record.
    pub fn customer_id(&self) -> &str {
        &self.record.customer_id
    }
}

/// An ordered group of customers assigned to one delivery run.
///
/// Built incrementally by the assignment pass and immutable once emitted.
/// Numbering is 1-based and contiguous within a day.
///
/// # Examples
///
/// ```
/// use depot_routes::models::{CustomerRecord, Route, RouteStop};
///
/// let mut route = Route::new(1);
/// route.push_stop(RouteStop {
///     record: CustomerRecord::new("C001", "Soda La Central"),
///     volume: 40.0,
///     distance_km: 2.5,
/// });
/// assert_eq!(route.number(), 1);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_volume(), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    number: u32,
    stops: Vec<RouteStop>,
    total_volume: f64,
}

impl Route {
    /// Creates an empty route with the given sequence number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            stops: Vec::new(),
            total_volume: 0.0,
        }
    }

    /// Appends a stop, accumulating its volume.
    pub fn push_stop(&mut self, stop: RouteStop) {
        self.total_volume += stop.volume;
        self.stops.push(stop);
    }

    /// 1-based sequence number within the day.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The ordered stops.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if no customer has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Aggregate volume across all stops.
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Mean volume per customer, zero for an empty route.
    pub fn mean_volume(&self) -> f64 {
        if self.stops.is_empty() {
            0.0
        } else {
            self.total_volume / self.stops.len() as f64
        }
    }

    /// Customer ids in stop order.
    pub fn customer_ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.customer_id()).collect()
    }
}
