//! Depot reference point derivation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{BoundingBox, GeoPoint};

/// The depot reference point for one run.
///
/// Derived once per run and immutable afterwards. Records whether the
/// configured fallback was substituted for an unusable computed mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    point: GeoPoint,
    from_fallback: bool,
}

impl Centroid {
    /// The reference coordinates.
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// `true` if the configured fallback replaced the computed mean.
    pub fn from_fallback(&self) -> bool {
        self.from_fallback
    }
}

/// Derives the depot reference point from the routable positions.
///
/// Takes the arithmetic mean of latitude and of longitude independently.
/// A few corrupted out-of-region rows can drag the mean far from the true
/// service area, so a mean outside the service bounding box is discarded
/// and the configured fallback substituted with a warning; same when no
/// positions exist at all. Never fails.
///
/// # Examples
///
/// ```
/// use depot_routes::geo::{depot_reference, BoundingBox, GeoPoint};
///
/// let region = BoundingBox::new(8.0, 11.0, -86.0, -82.0);
/// let fallback = GeoPoint::new(9.9281, -84.0907);
/// let positions = [GeoPoint::new(9.0, -84.0), GeoPoint::new(10.0, -85.0)];
///
/// let centroid = depot_reference(&positions, &region, fallback);
/// assert!(!centroid.from_fallback());
/// assert!((centroid.point().latitude - 9.5).abs() < 1e-10);
/// ```
pub fn depot_reference(
    positions: &[GeoPoint],
    bounds: &BoundingBox,
    fallback: GeoPoint,
) -> Centroid {
    if positions.is_empty() {
        warn!("no valid positions for centroid, using fallback reference point");
        return Centroid {
            point: fallback,
            from_fallback: true,
        };
    }

    let n = positions.len() as f64;
    let mean = GeoPoint::new(
        positions.iter().map(|p| p.latitude).sum::<f64>() / n,
        positions.iter().map(|p| p.longitude).sum::<f64>() / n,
    );

    if bounds.contains(&mean) {
        Centroid {
            point: mean,
            from_fallback: false,
        }
    } else {
        warn!(
            latitude = mean.latitude,
            longitude = mean.longitude,
            "computed centroid falls outside the service region, using fallback"
        );
        Centroid {
            point: fallback,
            from_fallback: true,
        }
    }
}
