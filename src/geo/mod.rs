//! Geographic primitives and depot reference derivation.
//!
//! Provides coordinate pairs with great-circle distance, the service
//! bounding box, and the centroid calculation used as the depot reference
//! point.

mod centroid;
mod point;

pub use centroid::{depot_reference, Centroid};
pub use point::{BoundingBox, GeoPoint};
