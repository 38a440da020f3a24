//! Proximity route builder.
//!
//! # Algorithm
//!
//! Sorts the prepared pool by ascending great-circle distance to the depot
//! reference point, then packs it in one capacity-bounded pass. Customers
//! close to the depot land on the earliest routes; when a route limit is
//! set, the most distant customers are the ones left unassigned.
//!
//! # Complexity
//!
//! O(n log n), dominated by the distance sort.

use std::collections::BTreeSet;

use crate::models::{Route, RouteStop};

use super::packing::{order_pool, pack_routes, CapacityLimits, OrderingPolicy};

/// Builds single-day routes from a prepared pool.
///
/// Returns the emitted routes and the ids of customers the route limit
/// left unassigned.
pub fn build_proximity_routes(
    mut pool: Vec<RouteStop>,
    limits: &CapacityLimits,
) -> (Vec<Route>, BTreeSet<String>) {
    order_pool(&mut pool, OrderingPolicy::NearestFirst);
    let (routes, remaining) = pack_routes(pool, limits);
    let unassigned = remaining
        .iter()
        .map(|s| s.customer_id().to_owned())
        .collect();
    (routes, unassigned)
}
