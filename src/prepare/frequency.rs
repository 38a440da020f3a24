//! Low-frequency customer pruning.
//!
//! Customers seen fewer than the minimum number of times within the
//! observation window are one-off orders, not standing delivery stops, and
//! are dropped entirely before assignment.

use std::collections::HashMap;

use tracing::info;

use crate::models::CustomerRecord;

/// Before/after statistics from one pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PruneStats {
    pub rows_before: usize,
    pub rows_after: usize,
    pub customers_before: usize,
    pub customers_after: usize,
    pub volume_before: f64,
    pub volume_after: f64,
}

/// Drops every row of customers seen fewer than `minimum_visits` times.
///
/// Counts occurrences per customer id across the whole input, keeps the
/// rows of customers at or above the threshold (stamping the count on each
/// retained record), and preserves the original row order. Rows are kept
/// or dropped whole; nothing is merged or aggregated. Deterministic: the
/// same input multiset always yields the same retained set.
///
/// # Examples
///
/// ```
/// use depot_routes::models::CustomerRecord;
/// use depot_routes::prepare::prune_infrequent;
///
/// let rows: Vec<CustomerRecord> = ["A", "A", "A", "B"]
///     .iter()
///     .map(|id| CustomerRecord::new(*id, *id))
///     .collect();
///
/// let (retained, stats) = prune_infrequent(rows, 3);
/// assert_eq!(retained.len(), 3);
/// assert!(retained.iter().all(|r| r.customer_id == "A"));
/// assert_eq!(stats.customers_before, 2);
/// assert_eq!(stats.customers_after, 1);
/// ```
pub fn prune_infrequent(
    rows: Vec<CustomerRecord>,
    minimum_visits: u32,
) -> (Vec<CustomerRecord>, PruneStats) {
    let mut occurrences: HashMap<&str, u32> = HashMap::new();
    for row in &rows {
        *occurrences.entry(row.customer_id.as_str()).or_insert(0) += 1;
    }

    let mut stats = PruneStats {
        rows_before: rows.len(),
        customers_before: occurrences.len(),
        customers_after: occurrences
            .values()
            .filter(|&&count| count >= minimum_visits)
            .count(),
        volume_before: rows.iter().filter_map(|r| r.volume).sum(),
        ..PruneStats::default()
    };

    let counts: HashMap<String, u32> = occurrences
        .into_iter()
        .map(|(id, count)| (id.to_owned(), count))
        .collect();

    let mut retained = Vec::with_capacity(rows.len());
    for mut row in rows {
        let count = counts[row.customer_id.as_str()];
        if count >= minimum_visits {
            row.visit_count = count;
            retained.push(row);
        }
    }

    stats.rows_after = retained.len();
    stats.volume_after = retained.iter().filter_map(|r| r.volume).sum();

    info!(
        rows_before = stats.rows_before,
        rows_after = stats.rows_after,
        customers_before = stats.customers_before,
        customers_after = stats.customers_after,
        volume_before = stats.volume_before,
        volume_after = stats.volume_after,
        "pruned infrequent customers"
    );

    (retained, stats)
}
