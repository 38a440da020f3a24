//! Capacity-bounded greedy bin-packing.
//!
//! # Algorithm
//!
//! One forward pass over an ordered candidate pool. Stops accumulate into
//! the current route until adding the next one would push the route past
//! the customer cap or the volume cap; the route is then closed and a
//! fresh one opened. A candidate whose own volume exceeds the cap still
//! ships, alone, on a route of one. With a route limit set, packing stops
//! once the limit is reached and hands the rest of the pool back.
//!
//! Greedy and single-pass: no backtracking, no balancing, a feasible but
//! not necessarily optimal partition.
//!
//! # Complexity
//!
//! O(n) over the pool; ordering the pool beforehand is the O(n log n) part.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Route, RouteStop};

/// Capacity limits for one packing pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityLimits {
    /// Most customers a single route may carry.
    pub max_customers: usize,
    /// Most volume a single route may carry.
    pub max_volume: f64,
    /// Most routes one pass may emit; `None` is unbounded.
    pub max_routes: Option<usize>,
}

/// How a candidate pool is ordered before packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Ascending distance to the depot reference point.
    NearestFirst,
    /// Descending volume, heaviest customers first.
    HeaviestFirst,
}

/// Sorts a pool in place by the given policy.
///
/// Both sorts are stable: candidates that compare equal keep their input
/// order, which keeps repeated runs identical.
pub fn order_pool(pool: &mut [RouteStop], policy: OrderingPolicy) {
    match policy {
        OrderingPolicy::NearestFirst => pool.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .expect("distances are finite")
        }),
        OrderingPolicy::HeaviestFirst => pool.sort_by(|a, b| {
            b.volume.partial_cmp(&a.volume).expect("volumes are finite")
        }),
    }
}

/// Packs an ordered pool into capacity-bounded routes.
///
/// Walks the pool in order, skipping rows of customers already assigned in
/// this pass, and accumulates stops into numbered routes (contiguous from
/// 1). Returns the emitted routes together with the candidates left over
/// when the route limit cut the pass short; with no limit the leftover is
/// always empty.
pub fn pack_routes(
    pool: Vec<RouteStop>,
    limits: &CapacityLimits,
) -> (Vec<Route>, Vec<RouteStop>) {
    if limits.max_routes == Some(0) {
        return (Vec::new(), pool);
    }

    let mut routes: Vec<Route> = Vec::new();
    let mut remaining: Vec<RouteStop> = Vec::new();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut current = Route::new(1);
    let mut stopped = false;

    for stop in pool {
        if assigned.contains(stop.customer_id()) {
            continue;
        }
        if stopped {
            remaining.push(stop);
            continue;
        }

        let over_customers = current.len() >= limits.max_customers;
        let over_volume = current.total_volume() + stop.volume > limits.max_volume;
        if (over_customers || over_volume) && !current.is_empty() {
            let next = current.number() + 1;
            let closed = std::mem::replace(&mut current, Route::new(next));
            debug!(
                route = closed.number(),
                customers = closed.len(),
                volume = closed.total_volume(),
                "route closed"
            );
            routes.push(closed);

            if limits.max_routes.is_some_and(|max| routes.len() >= max) {
                warn!(
                    max_routes = routes.len(),
                    "route limit reached, remaining customers left unassigned"
                );
                stopped = true;
                remaining.push(stop);
                continue;
            }
        }

        assigned.insert(stop.customer_id().to_owned());
        current.push_stop(stop);
    }

    if !current.is_empty() {
        debug!(
            route = current.number(),
            customers = current.len(),
            volume = current.total_volume(),
            "route closed"
        );
        routes.push(current);
    }

    (routes, remaining)
}
