//! Domain model types for route suggestion.
//!
//! Provides the core abstractions: customer rows with raw and cleaned
//! fields, routable stops with depot distance, capacity-bounded routes,
//! and the single-day and weekly result types.

mod plan;
mod record;
mod route;

pub use plan::{DaySchedule, RoutePlan, WeeklyPlan};
pub use record::CustomerRecord;
pub use route::{Route, RouteStop};
