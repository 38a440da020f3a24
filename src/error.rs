//! Fatal run errors.
//!
//! Per-record problems (an unparseable coordinate, a missing volume) never
//! abort a run; the record is excluded and the condition reported in
//! aggregate. Only structural problems with the input are errors.

use thiserror::Error;

/// Conditions that abort a run with no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// A required semantic field could not be resolved for an input row.
    ///
    /// Column discovery happens upstream; by the time rows reach the
    /// engine the only unresolved case left is a blank customer id.
    #[error("input row is missing required field `{0}`")]
    MissingField(&'static str),

    /// Zero records remain after sanitization and frequency pruning.
    ///
    /// Returned instead of an empty route list so callers cannot mistake
    /// an unroutable batch for a successfully routed one.
    #[error("no routable customers remain after cleaning and pruning")]
    EmptyPool,
}
