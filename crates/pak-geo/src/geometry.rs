//! Drawn map geometry and its reduction to an analysis point.
//!
//! The dashboard map hands the backend a marker, polygon, or rectangle. The
//! analysis target of any drawn shape is defined as its vertex-average
//! centroid; area-weighted statistics are out of scope.

use serde::{Deserialize, Serialize};

/// A single lat/lon coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Shape drawn on the dashboard map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates", rename_all = "lowercase")]
pub enum Geometry {
    Marker(GeoPoint),
    Polygon(Vec<GeoPoint>),
    Rectangle(Vec<GeoPoint>),
}

impl Geometry {
    /// Reduce the shape to its analysis point: the marker itself, or the
    /// vertex-average of a polygon/rectangle. This is the defined behavior,
    /// not an approximation of an area integral. Returns `None` for a shape
    /// with no vertices.
    pub fn centroid(&self) -> Option<GeoPoint> {
        match self {
            Geometry::Marker(p) => Some(*p),
            Geometry::Polygon(pts) | Geometry::Rectangle(pts) => {
                if pts.is_empty() {
                    return None;
                }
                let n = pts.len() as f64;
                Some(GeoPoint {
                    lat: pts.iter().map(|p| p.lat).sum::<f64>() / n,
                    lon: pts.iter().map(|p| p.lon).sum::<f64>() / n,
                })
            }
        }
    }

    /// Label used in saved analysis records and GeoJSON export.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Marker(_) => "marker",
            Geometry::Polygon(_) => "polygon",
            Geometry::Rectangle(_) => "rectangle",
        }
    }
}
