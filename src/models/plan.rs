//! Single-day and weekly assignment results.

use std::collections::BTreeSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::geo::Centroid;

use super::Route;

/// The single-day assignment result.
///
/// Ordered routes, the ids of customers the route limit left out, and the
/// reference point the run measured proximity against. Each invocation of
/// the engine returns a fresh plan; nothing is retained between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    routes: Vec<Route>,
    unassigned: BTreeSet<String>,
    reference: Centroid,
}

impl RoutePlan {
    /// Assembles a plan from an assignment pass.
    pub fn new(routes: Vec<Route>, unassigned: BTreeSet<String>, reference: Centroid) -> Self {
        Self {
            routes,
            unassigned,
            reference,
        }
    }

    /// The routes in emission order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Ids of customers no route could take.
    pub fn unassigned(&self) -> &BTreeSet<String> {
        &self.unassigned
    }

    /// The reference point the run used.
    pub fn reference(&self) -> Centroid {
        self.reference
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total assigned volume across all routes.
    pub fn total_volume(&self) -> f64 {
        self.routes.iter().map(|r| r.total_volume()).sum()
    }

    /// Total customers assigned across all routes.
    pub fn total_customers(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Mean volume per assigned customer, zero for an empty plan.
    pub fn mean_volume_per_customer(&self) -> f64 {
        let customers = self.total_customers();
        if customers == 0 {
            0.0
        } else {
            self.total_volume() / customers as f64
        }
    }

    /// `true` when the route limit cut assignment short.
    pub fn is_truncated(&self) -> bool {
        !self.unassigned.is_empty()
    }
}

/// One business day's routes within a weekly projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    day: Weekday,
    routes: Vec<Route>,
}

impl DaySchedule {
    /// Creates a day schedule.
    pub fn new(day: Weekday, routes: Vec<Route>) -> Self {
        Self { day, routes }
    }

    /// The business day.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// The day's routes in emission order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes scheduled for this day.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total volume scheduled for this day.
    pub fn total_volume(&self) -> f64 {
        self.routes.iter().map(|r| r.total_volume()).sum()
    }

    /// Total customers scheduled for this day.
    pub fn total_customers(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

/// A week's projected assignment.
///
/// Days appear in scheduling order: the day after the anchor first,
/// wrapping across the week, weekends excluded. Each customer id appears
/// in at most one route across the whole plan; customers still unassigned
/// after the last business day are reported, not rolled into another week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: Vec<DaySchedule>,
    unassigned: BTreeSet<String>,
    reference: Centroid,
}

impl WeeklyPlan {
    /// Assembles a weekly plan from the scheduler's output.
    pub fn new(days: Vec<DaySchedule>, unassigned: BTreeSet<String>, reference: Centroid) -> Self {
        Self {
            days,
            unassigned,
            reference,
        }
    }

    /// The scheduled days in visiting order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Routes for one business day, if any were scheduled.
    pub fn routes_for(&self, day: Weekday) -> Option<&[Route]> {
        self.days.iter().find(|d| d.day() == day).map(|d| d.routes())
    }

    /// Ids of customers the week could not absorb.
    pub fn unassigned(&self) -> &BTreeSet<String> {
        &self.unassigned
    }

    /// The reference point the run used.
    pub fn reference(&self) -> Centroid {
        self.reference
    }

    /// Number of routes across the whole week.
    pub fn num_routes(&self) -> usize {
        self.days.iter().map(|d| d.num_routes()).sum()
    }

    /// Total assigned volume across the whole week.
    pub fn total_volume(&self) -> f64 {
        self.days.iter().map(|d| d.total_volume()).sum()
    }

    /// Total customers assigned across the whole week.
    pub fn total_customers(&self) -> usize {
        self.days.iter().map(|d| d.total_customers()).sum()
    }
}
