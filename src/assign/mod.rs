//! Assignment: the shared capacity-bounded packing pass and both builders.
//!
//! - [`pack_routes`] — one greedy pass, `(pool, limits)` to `(routes, remaining)`
//! - [`build_proximity_routes`] — single day, nearest customers first
//! - [`schedule_week`] — weekly projection, heaviest customers first

mod packing;
mod proximity;
mod weekly;

pub use packing::{order_pool, pack_routes, CapacityLimits, OrderingPolicy};
pub use proximity::build_proximity_routes;
pub use weekly::schedule_week;
