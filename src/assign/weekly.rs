//! Weekly projection scheduler.
//!
//! Projects the prepared pool across the business days of one week. The
//! pool is ordered once, heaviest customers first by default, and each
//! business day starting the day after the anchor receives one
//! capacity-bounded packing pass over whatever earlier days left behind.
//! Customers still unassigned after the last business day are reported,
//! not rolled into a following week.

use std::collections::BTreeSet;

use chrono::Weekday;

use crate::models::{DaySchedule, RouteStop};

use super::packing::{order_pool, pack_routes, CapacityLimits, OrderingPolicy};

/// Schedules the pool across one week of business days.
///
/// Visits the 7 calendar slots after `anchor` in order, wrapping across the
/// week and skipping days not in `business_days`, and packs routes for each
/// eligible day until the pool runs dry. Each customer id is assigned on at
/// most one day. Without a route limit the first business day absorbs the
/// whole pool; the limit is what spreads customers across the week.
pub fn schedule_week(
    mut pool: Vec<RouteStop>,
    limits: &CapacityLimits,
    anchor: Weekday,
    ordering: OrderingPolicy,
    business_days: &[Weekday],
) -> (Vec<DaySchedule>, BTreeSet<String>) {
    order_pool(&mut pool, ordering);

    let mut days = Vec::new();
    let mut day = anchor.succ();
    for _ in 0..7 {
        if pool.is_empty() {
            break;
        }
        if business_days.contains(&day) {
            let (routes, rest) = pack_routes(std::mem::take(&mut pool), limits);
            pool = rest;
            if !routes.is_empty() {
                days.push(DaySchedule::new(day, routes));
            }
        }
        day = day.succ();
    }

    let unassigned = pool.iter().map(|s| s.customer_id().to_owned()).collect();
    (days, unassigned)
}
