//! Run configuration.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::assign::{CapacityLimits, OrderingPolicy};
use crate::geo::{BoundingBox, GeoPoint};

/// Configuration for one engine run.
///
/// Every field has a default matching the production depot setup (the
/// Costa Rican service region, San José as the fallback reference point),
/// so partial configuration files only override what they name.
///
/// # Examples
///
/// ```
/// use depot_routes::config::RoutingConfig;
///
/// let config = RoutingConfig::default().with_max_routes(6);
/// assert_eq!(config.max_customers_per_route, 15);
/// assert_eq!(config.max_volume_per_route, 694.0);
/// assert_eq!(config.max_routes, Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Most customers a single route may carry.
    pub max_customers_per_route: usize,
    /// Most volume a single route may carry, in case equivalents.
    pub max_volume_per_route: f64,
    /// Most routes available per day; `None` is unbounded.
    pub max_routes: Option<usize>,
    /// When set, `run` produces a weekly projection instead of one day.
    pub generate_weekly_projection: bool,
    /// Customers seen fewer times than this are pruned before assignment.
    pub minimum_visit_count: u32,
    /// Service region; coordinates outside it are treated as invalid.
    pub service_bounds: BoundingBox,
    /// Reference point used when the computed centroid is unusable.
    pub fallback_reference_point: GeoPoint,
    /// Ordering applied to the pool in the weekly projection.
    ///
    /// The single-day builder always packs nearest-first. Weekly days pack
    /// heaviest-first unless this is set to `NearestFirst`, which makes
    /// each day respect geographic proximity instead of volume.
    pub weekly_ordering: OrderingPolicy,
    /// Days eligible for scheduling in the weekly projection.
    pub business_days: Vec<Weekday>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_customers_per_route: 15,
            max_volume_per_route: 694.0,
            max_routes: None,
            generate_weekly_projection: false,
            minimum_visit_count: 3,
            service_bounds: BoundingBox::new(8.0, 11.0, -86.0, -82.0),
            fallback_reference_point: GeoPoint::new(9.9281, -84.0907),
            weekly_ordering: OrderingPolicy::HeaviestFirst,
            business_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl RoutingConfig {
    /// Sets the per-route customer cap.
    pub fn with_max_customers_per_route(mut self, max: usize) -> Self {
        self.max_customers_per_route = max;
        self
    }

    /// Sets the per-route volume cap.
    pub fn with_max_volume_per_route(mut self, max: f64) -> Self {
        self.max_volume_per_route = max;
        self
    }

    /// Sets the number of routes available per day.
    pub fn with_max_routes(mut self, max: usize) -> Self {
        self.max_routes = Some(max);
        self
    }

    /// Enables or disables the weekly projection for `run`.
    pub fn with_weekly_projection(mut self, enabled: bool) -> Self {
        self.generate_weekly_projection = enabled;
        self
    }

    /// Sets the minimum visit count for the frequency filter.
    pub fn with_minimum_visit_count(mut self, minimum: u32) -> Self {
        self.minimum_visit_count = minimum;
        self
    }

    /// Sets the service bounding box.
    pub fn with_service_bounds(mut self, bounds: BoundingBox) -> Self {
        self.service_bounds = bounds;
        self
    }

    /// Sets the fallback reference point.
    pub fn with_fallback_reference_point(mut self, point: GeoPoint) -> Self {
        self.fallback_reference_point = point;
        self
    }

    /// Sets the weekly pool ordering.
    pub fn with_weekly_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.weekly_ordering = ordering;
        self
    }

    /// Sets the eligible business days.
    pub fn with_business_days(mut self, days: Vec<Weekday>) -> Self {
        self.business_days = days;
        self
    }

    /// The capacity limits one packing pass runs under.
    pub fn capacity_limits(&self) -> CapacityLimits {
        CapacityLimits {
            max_customers: self.max_customers_per_route,
            max_volume: self.max_volume_per_route,
            max_routes: self.max_routes,
        }
    }
}
