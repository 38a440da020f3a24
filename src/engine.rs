//! The route-generation engine.
//!
//! Ties the pipeline together: field sanitization, service-region
//! validation, frequency pruning, centroid derivation, and greedy
//! assignment for one day or projected across a week. Every call returns a
//! freshly constructed result; the engine holds only configuration, so one
//! instance can serve any number of concurrent runs.

use chrono::Weekday;
use tracing::{info, warn};

use crate::assign::{build_proximity_routes, schedule_week};
use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::geo::{depot_reference, Centroid, GeoPoint};
use crate::models::{CustomerRecord, RoutePlan, RouteStop, WeeklyPlan};
use crate::prepare::{clean_coordinate, parse_volume, prune_infrequent};

/// Result of a dispatched run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Single-day suggestion.
    Daily(RoutePlan),
    /// Weekly projection.
    Weekly(WeeklyPlan),
}

/// The route-generation engine.
///
/// # Examples
///
/// ```
/// use depot_routes::config::RoutingConfig;
/// use depot_routes::engine::RouteEngine;
/// use depot_routes::models::CustomerRecord;
///
/// // Three deliveries to the same customer within the window: frequent
/// // enough to keep, routed once.
/// let rows: Vec<CustomerRecord> = (0..3)
///     .map(|_| {
///         CustomerRecord::new("C001", "Soda La Central")
///             .with_raw_coordinates("9.9350", "-84.0800")
///             .with_raw_volume("120")
///     })
///     .collect();
///
/// let engine = RouteEngine::new(RoutingConfig::default());
/// let plan = engine.suggest_routes(rows).unwrap();
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.total_customers(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteEngine {
    config: RoutingConfig,
}

impl RouteEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs under.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Runs per configuration: weekly projection when enabled, otherwise a
    /// single-day suggestion. `anchor` is today's weekday; the weekly
    /// projection starts the day after it.
    pub fn run(
        &self,
        rows: Vec<CustomerRecord>,
        anchor: Weekday,
    ) -> Result<RunOutcome, RoutingError> {
        if self.config.generate_weekly_projection {
            self.project_week(rows, anchor).map(RunOutcome::Weekly)
        } else {
            self.suggest_routes(rows).map(RunOutcome::Daily)
        }
    }

    /// Suggests routes for a single day, nearest customers first.
    pub fn suggest_routes(&self, rows: Vec<CustomerRecord>) -> Result<RoutePlan, RoutingError> {
        let (pool, reference) = self.prepare(rows)?;
        let (routes, unassigned) = build_proximity_routes(pool, &self.config.capacity_limits());
        info!(
            routes = routes.len(),
            unassigned = unassigned.len(),
            "single-day assignment complete"
        );
        Ok(RoutePlan::new(routes, unassigned, reference))
    }

    /// Projects routes across the business week following `anchor`,
    /// heaviest customers scheduled earliest unless configured otherwise.
    pub fn project_week(
        &self,
        rows: Vec<CustomerRecord>,
        anchor: Weekday,
    ) -> Result<WeeklyPlan, RoutingError> {
        let (pool, reference) = self.prepare(rows)?;
        let (days, unassigned) = schedule_week(
            pool,
            &self.config.capacity_limits(),
            anchor,
            self.config.weekly_ordering,
            &self.config.business_days,
        );
        info!(
            days = days.len(),
            unassigned = unassigned.len(),
            "weekly projection complete"
        );
        Ok(WeeklyPlan::new(days, unassigned, reference))
    }

    /// Shared preparation: validate, sanitize, prune, derive the reference
    /// point, and compute each stop's distance to it.
    fn prepare(
        &self,
        rows: Vec<CustomerRecord>,
    ) -> Result<(Vec<RouteStop>, Centroid), RoutingError> {
        if rows.iter().any(|r| r.customer_id.trim().is_empty()) {
            return Err(RoutingError::MissingField("customer id"));
        }

        let total = rows.len();
        let mut routable = Vec::with_capacity(total);
        let mut invalid_coordinates = 0usize;
        let mut out_of_region = 0usize;
        let mut missing_volume = 0usize;

        for mut row in rows {
            row.latitude = row.raw_latitude.as_deref().and_then(clean_coordinate);
            row.longitude = row.raw_longitude.as_deref().and_then(clean_coordinate);
            row.volume = row.raw_volume.as_deref().and_then(parse_volume);

            let position = match row.position() {
                Some(position) => position,
                None => {
                    invalid_coordinates += 1;
                    continue;
                }
            };
            if !self.config.service_bounds.contains(&position) {
                out_of_region += 1;
                continue;
            }
            if row.volume.is_none() {
                missing_volume += 1;
                continue;
            }
            routable.push(row);
        }

        if invalid_coordinates + out_of_region + missing_volume > 0 {
            warn!(
                total,
                invalid_coordinates,
                out_of_region,
                missing_volume,
                "dropped unroutable rows"
            );
        }

        let (retained, _stats) = prune_infrequent(routable, self.config.minimum_visit_count);
        if retained.is_empty() {
            return Err(RoutingError::EmptyPool);
        }

        let positions: Vec<GeoPoint> = retained.iter().filter_map(|r| r.position()).collect();
        let reference = depot_reference(
            &positions,
            &self.config.service_bounds,
            self.config.fallback_reference_point,
        );

        let point = reference.point();
        let pool: Vec<RouteStop> = retained
            .into_iter()
            .filter_map(|record| {
                let position = record.position()?;
                let volume = record.volume?;
                Some(RouteStop {
                    distance_km: position.distance_km(&point),
                    volume,
                    record,
                })
            })
            .collect();

        Ok((pool, reference))
    }
}

/// Distinct depot ids present in a batch, sorted.
pub fn available_depots(rows: &[CustomerRecord]) -> Vec<String> {
    let mut depots: Vec<String> = rows.iter().filter_map(|r| r.depot.clone()).collect();
    depots.sort();
    depots.dedup();
    depots
}

/// Restricts a batch to the rows served from one depot.
pub fn filter_depot(rows: Vec<CustomerRecord>, depot: &str) -> Vec<CustomerRecord> {
    rows.into_iter()
        .filter(|r| r.depot.as_deref() == Some(depot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One delivery row inside the service region.
    fn row(id: &str, volume: &str, lat: &str, lon: &str) -> CustomerRecord {
        CustomerRecord::new(id, format!("Cliente {id}"))
            .with_raw_volume(volume)
            .with_raw_coordinates(lat, lon)
    }

    /// Three occurrences of the same customer, enough to survive pruning.
    fn frequent(id: &str, volume: &str, lat: &str, lon: &str) -> Vec<CustomerRecord> {
        (0..3).map(|_| row(id, volume, lat, lon)).collect()
    }

    fn engine() -> RouteEngine {
        RouteEngine::new(RoutingConfig::default())
    }

    #[test]
    fn test_end_to_end_single_day() {
        let mut rows = Vec::new();
        rows.extend(frequent("C001", "120", "9.9350", "-84.0800"));
        rows.extend(frequent("C002", "80", "9.9400", "-84.0900"));
        rows.extend(frequent("C003", "40", "10.0100", "-84.2100"));

        let plan = engine().suggest_routes(rows).expect("routable batch");
        assert_eq!(plan.num_routes(), 1);
        assert_eq!(plan.total_customers(), 3);
        assert!((plan.total_volume() - 240.0).abs() < 1e-10);
        assert!(!plan.is_truncated());
        assert!(!plan.reference().from_fallback());
    }

    #[test]
    fn test_routes_ordered_by_distance_to_centroid() {
        // FAR sits far north-west of the other two, dragging the mean
        // towards itself; NEAR ends up closest to the mean, FAR farthest.
        let mut rows = Vec::new();
        rows.extend(frequent("FAR", "10", "10.8000", "-85.5000"));
        rows.extend(frequent("NEAR", "10", "9.9500", "-84.1000"));
        rows.extend(frequent("MID", "10", "9.9000", "-84.0500"));

        let plan = engine().suggest_routes(rows).expect("routable batch");
        let ids = plan.routes()[0].customer_ids();
        assert_eq!(ids, vec!["NEAR", "MID", "FAR"]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(
            engine().suggest_routes(Vec::new()),
            Err(RoutingError::EmptyPool)
        );
    }

    #[test]
    fn test_blank_customer_id_is_fatal() {
        let rows = vec![row("", "10", "9.93", "-84.08")];
        assert_eq!(
            engine().suggest_routes(rows),
            Err(RoutingError::MissingField("customer id"))
        );
    }

    #[test]
    fn test_out_of_region_rows_dropped() {
        // 45.0 parses as a coordinate but sits outside the service
        // bounding box, so every row is dropped and the pool is empty.
        let rows = frequent("C001", "10", "45.0", "-84.08");
        assert_eq!(
            engine().suggest_routes(rows),
            Err(RoutingError::EmptyPool)
        );
    }

    #[test]
    fn test_unparseable_fields_dropped_not_fatal() {
        let mut rows = Vec::new();
        rows.extend(frequent("GOOD", "25", "9.9350", "-84.0800"));
        rows.extend(frequent("BADCOORD", "25", "no gps", "-84.0800"));
        rows.extend(frequent("BADVOL", "sin dato", "9.9350", "-84.0800"));

        let plan = engine().suggest_routes(rows).expect("one good customer");
        assert_eq!(plan.total_customers(), 1);
        assert_eq!(plan.routes()[0].customer_ids(), vec!["GOOD"]);
    }

    #[test]
    fn test_infrequent_customers_pruned() {
        let mut rows = Vec::new();
        rows.extend(frequent("KEEP", "30", "9.9350", "-84.0800"));
        rows.push(row("DROP", "30", "9.9350", "-84.0800"));
        rows.push(row("DROP", "30", "9.9350", "-84.0800"));

        let plan = engine().suggest_routes(rows).expect("routable batch");
        assert_eq!(plan.total_customers(), 1);
        assert_eq!(plan.routes()[0].customer_ids(), vec!["KEEP"]);
        assert_eq!(plan.routes()[0].stops()[0].record.visit_count, 3);
    }

    #[test]
    fn test_concatenated_coordinates_recovered() {
        // Twenty coordinates fused into one cell, well past the
        // corruption threshold; the first one wins.
        let corrupted_lat = "9.9350,".repeat(20);
        let rows = frequent("C001", "50", corrupted_lat.as_str(), "-84.0800");
        let plan = engine().suggest_routes(rows).expect("first value wins");
        assert_eq!(plan.total_customers(), 1);
        let stop = &plan.routes()[0].stops()[0];
        assert_eq!(stop.record.latitude, Some(9.9350));
    }

    #[test]
    fn test_run_dispatches_on_configuration() {
        let daily = engine()
            .run(
                frequent("C001", "10", "9.9350", "-84.0800"),
                Weekday::Wed,
            )
            .expect("daily");
        assert!(matches!(daily, RunOutcome::Daily(_)));

        let weekly_engine =
            RouteEngine::new(RoutingConfig::default().with_weekly_projection(true));
        let weekly = weekly_engine
            .run(
                frequent("C001", "10", "9.9350", "-84.0800"),
                Weekday::Wed,
            )
            .expect("weekly");
        assert!(matches!(weekly, RunOutcome::Weekly(_)));
    }

    #[test]
    fn test_weekly_projection_end_to_end() {
        let config = RoutingConfig::default()
            .with_weekly_projection(true)
            .with_max_customers_per_route(1)
            .with_max_routes(1);
        let engine = RouteEngine::new(config);

        let mut rows = Vec::new();
        rows.extend(frequent("HEAVY", "500", "9.9350", "-84.0800"));
        rows.extend(frequent("LIGHT", "20", "9.9400", "-84.0900"));

        let plan = engine
            .project_week(rows, Weekday::Sun)
            .expect("routable batch");
        // One single-customer route per day: Monday takes the heavy
        // customer, Tuesday the light one.
        assert_eq!(plan.days()[0].day(), Weekday::Mon);
        assert_eq!(plan.days()[0].routes()[0].customer_ids(), vec!["HEAVY"]);
        assert_eq!(plan.days()[1].day(), Weekday::Tue);
        assert_eq!(plan.days()[1].routes()[0].customer_ids(), vec!["LIGHT"]);
        assert!(plan.unassigned().is_empty());
    }

    #[test]
    fn test_route_limit_reports_unassigned() {
        let config = RoutingConfig::default()
            .with_max_customers_per_route(1)
            .with_max_routes(1);
        let engine = RouteEngine::new(config);

        let mut rows = Vec::new();
        rows.extend(frequent("C001", "10", "9.9350", "-84.0800"));
        rows.extend(frequent("C002", "10", "10.0100", "-84.2100"));

        let plan = engine.suggest_routes(rows).expect("partial assignment");
        assert_eq!(plan.num_routes(), 1);
        assert!(plan.is_truncated());
        assert_eq!(plan.unassigned().len(), 1);
    }

    #[test]
    fn test_identical_runs_identical_results() {
        let mut rows = Vec::new();
        rows.extend(frequent("C001", "120", "9.9350", "-84.0800"));
        rows.extend(frequent("C002", "80", "9.9400", "-84.0900"));
        rows.extend(frequent("C003", "40", "10.0100", "-84.2100"));

        let first = engine().suggest_routes(rows.clone()).expect("first run");
        let second = engine().suggest_routes(rows).expect("second run");
        assert_eq!(first, second);
    }

    #[test]
    fn test_available_depots_sorted_distinct() {
        let rows = vec![
            row("C1", "1", "9.9", "-84.0").with_depot("D02"),
            row("C2", "1", "9.9", "-84.0").with_depot("D01"),
            row("C3", "1", "9.9", "-84.0").with_depot("D02"),
            row("C4", "1", "9.9", "-84.0"),
        ];
        assert_eq!(available_depots(&rows), vec!["D01", "D02"]);
    }

    #[test]
    fn test_filter_depot() {
        let rows = vec![
            row("C1", "1", "9.9", "-84.0").with_depot("D01"),
            row("C2", "1", "9.9", "-84.0").with_depot("D02"),
            row("C3", "1", "9.9", "-84.0"),
        ];
        let kept = filter_depot(rows, "D01");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].customer_id, "C1");
    }
}
