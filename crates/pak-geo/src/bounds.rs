//! National bounding box and the in-bounds predicate.
//!
//! Every location-bound request is gated on this rectangle before any
//! synthesis runs. Rejections carry the box back to the caller so a client
//! can self-correct.

use serde::{Deserialize, Serialize};

/// Axis-aligned lat/lon rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Bounding box enclosing Pakistan's national territory.
pub const PAKISTAN_BOUNDS: Bounds = Bounds {
    min_lat: 23.5,
    max_lat: 37.1,
    min_lon: 60.9,
    max_lon: 77.5,
};

impl Bounds {
    /// True iff the point lies inside the rectangle (edges inclusive).
    /// NaN coordinates compare false and are therefore rejected.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Is the point within Pakistan's bounding box?
pub fn is_inside_pakistan(lat: f64, lon: f64) -> bool {
    PAKISTAN_BOUNDS.contains(lat, lon)
}
