//! Result export formats.
//!
//! Supports:
//! - CSV (`Date,Value` rows)
//! - GeoJSON (FeatureCollection wrapping the drawn geometry with stats and
//!   series embedded in `properties`)
//!
//! Shapefile export is declared but not implemented.

use pak_geo::{GeoPoint, Geometry};
use serde_json::{json, Value};
use thiserror::Error;

use crate::params::Parameter;
use crate::stats::Statistics;
use crate::synth::TimeSeriesPoint;

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("shapefile export is not implemented")]
    ShapefileUnsupported,
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
    #[error("geometry has no vertices")]
    EmptyGeometry,
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Export format requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    GeoJson,
    Shapefile,
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "geojson" => Ok(ExportFormat::GeoJson),
            "shapefile" | "shp" => Ok(ExportFormat::Shapefile),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a series as `Date,Value` CSV.
pub fn to_csv(series: &[TimeSeriesPoint]) -> String {
    let mut out = String::from("Date,Value\n");
    for point in series {
        out.push_str(&format!("{},{}\n", point.date, point.value));
    }
    out
}

fn ring(points: &[GeoPoint]) -> Vec<[f64; 2]> {
    let mut coords: Vec<[f64; 2]> = points.iter().map(|p| [p.lon, p.lat]).collect();
    // GeoJSON rings close on themselves
    if let (Some(first), Some(last)) = (coords.first().copied(), coords.last().copied()) {
        if first != last {
            coords.push(first);
        }
    }
    coords
}

fn geometry_json(geometry: &Geometry) -> Result<Value> {
    match geometry {
        Geometry::Marker(p) => Ok(json!({
            "type": "Point",
            "coordinates": [p.lon, p.lat],
        })),
        Geometry::Polygon(pts) | Geometry::Rectangle(pts) => {
            if pts.is_empty() {
                return Err(ExportError::EmptyGeometry);
            }
            Ok(json!({
                "type": "Polygon",
                "coordinates": [ring(pts)],
            }))
        }
    }
}

/// Wrap a computed result as a GeoJSON FeatureCollection around the drawn
/// geometry, with the statistics and series in `properties`.
pub fn to_geojson(
    geometry: &Geometry,
    param: Parameter,
    series: &[TimeSeriesPoint],
    stats: &Statistics,
) -> Result<Value> {
    let spec = param.spec();
    Ok(json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": geometry_json(geometry)?,
            "properties": {
                "parameter": spec.id,
                "name": spec.name,
                "unit": spec.unit,
                "satellite": spec.satellite,
                "source": spec.source,
                "geometryType": geometry.kind(),
                "stats": stats,
                "timeSeries": series,
            },
        }],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use crate::synth::{synthesize, Target};

    fn sample() -> Vec<TimeSeriesPoint> {
        synthesize(Parameter::Ndvi, Target::Point { lat: 30.0, lon: 70.0 }, 2020, 2020)
    }

    #[test]
    fn test_csv_shape() {
        let csv = to_csv(&sample());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines[0], "Date,Value");
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("2020-01-01,"));
    }

    #[test]
    fn test_geojson_marker() {
        let series = sample();
        let stats = compute_stats(&series);
        let g = Geometry::Marker(GeoPoint { lat: 30.0, lon: 70.0 });
        let doc = to_geojson(&g, Parameter::Ndvi, &series, &stats).unwrap();

        assert_eq!(doc["type"], "FeatureCollection");
        let feature = &doc["features"][0];
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], 70.0);
        assert_eq!(feature["properties"]["parameter"], "ndvi");
        assert_eq!(feature["properties"]["timeSeries"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_geojson_polygon_ring_closed() {
        let series = sample();
        let stats = compute_stats(&series);
        let g = Geometry::Polygon(vec![
            GeoPoint { lat: 30.0, lon: 70.0 },
            GeoPoint { lat: 31.0, lon: 70.0 },
            GeoPoint { lat: 31.0, lon: 71.0 },
        ]);
        let doc = to_geojson(&g, Parameter::No2, &series, &stats).unwrap();
        let ring = doc["features"][0]["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_shapefile_not_implemented() {
        assert!(matches!("shapefile".parse::<ExportFormat>(), Ok(ExportFormat::Shapefile)));
        // The boundary layer turns the Shapefile variant into
        // ExportError::ShapefileUnsupported before any formatting runs.
        let err = ExportError::ShapefileUnsupported;
        assert_eq!(err.to_string(), "shapefile export is not implemented");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(matches!(
            "kml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(_))
        ));
    }
}
