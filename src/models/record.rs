//! Customer record type.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// One imported delivery row for a single customer visit.
///
/// Created from one row of the source export with its raw text fields
/// intact. Sanitization fills in the cleaned coordinates and parsed volume;
/// the frequency filter stamps the occurrence count. A record is never
/// mutated after it enters a route.
///
/// # Examples
///
/// ```
/// use depot_routes::models::CustomerRecord;
///
/// let rec = CustomerRecord::new("C042", "Pulpería El Alto")
///     .with_raw_coordinates("9.9281", "-84.0907")
///     .with_raw_volume("35.5");
/// assert_eq!(rec.customer_id, "C042");
/// assert!(rec.latitude.is_none()); // cleaned values are set by sanitization
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer identifier, unique within a depot's pool.
    pub customer_id: String,
    /// Human-readable customer name.
    pub display_name: String,
    /// Depot this row was served from, if known.
    #[serde(default)]
    pub depot: Option<String>,
    /// Volume field exactly as imported.
    #[serde(default)]
    pub raw_volume: Option<String>,
    /// Latitude field exactly as imported.
    #[serde(default)]
    pub raw_latitude: Option<String>,
    /// Longitude field exactly as imported.
    #[serde(default)]
    pub raw_longitude: Option<String>,
    /// Externally supplied route tag, carried through untouched.
    #[serde(default)]
    pub route_label: Option<String>,
    /// Cleaned latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Cleaned longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Parsed volume in case equivalents.
    #[serde(default)]
    pub volume: Option<f64>,
    /// Times this customer appeared in the observation window.
    #[serde(default)]
    pub visit_count: u32,
}

impl CustomerRecord {
    /// Creates a record with the given id and display name.
    pub fn new(customer_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            display_name: display_name.into(),
            depot: None,
            raw_volume: None,
            raw_latitude: None,
            raw_longitude: None,
            route_label: None,
            latitude: None,
            longitude: None,
            volume: None,
            visit_count: 0,
        }
    }

    /// Sets the depot id.
    pub fn with_depot(mut self, depot: impl Into<String>) -> Self {
        self.depot = Some(depot.into());
        self
    }

    /// Sets the raw volume field.
    pub fn with_raw_volume(mut self, raw: impl Into<String>) -> Self {
        self.raw_volume = Some(raw.into());
        self
    }

    /// Sets the raw latitude and longitude fields.
    pub fn with_raw_coordinates(
        mut self,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.raw_latitude = Some(latitude.into());
        self.raw_longitude = Some(longitude.into());
        self
    }

    /// Sets the externally supplied route-distance label.
    pub fn with_route_label(mut self, label: impl Into<String>) -> Self {
        self.route_label = Some(label.into());
        self
    }

    /// Cleaned position, present once sanitization found both coordinates.
    pub fn position(&self) -> Option<GeoPoint> {
        self.latitude
            .zip(self.longitude)
            .map(|(latitude, longitude)| GeoPoint::new(latitude, longitude))
    }
}
