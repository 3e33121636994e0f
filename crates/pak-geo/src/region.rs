//! Coarse land-cover / emission-regime classification.
//!
//! Two priority-ordered classifiers over the same category set:
//!
//! - `classify_agro`: broad agro-climatic zones, used for the vegetation
//!   index where irrigation and terrain dominate.
//! - `classify_emission`: named urban/industrial rectangles take precedence
//!   over the agro zones, used for combustion-linked parameters (aerosol,
//!   NO2, SO2, CO) where city plumes dominate the signal.
//!
//! The zone edges and city boxes are hand-tuned illustrative constants.
//! Changing any of them changes synthesized output for every location they
//! cover; treat edits as behavior changes.

use serde::{Deserialize, Serialize};

/// Coarse land-cover / emission regime for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionCategory {
    /// Irrigated Indus basin plain (Punjab, upper Sindh)
    IndusPlain,
    /// Karakoram / Hindu Kush / Himalayan north
    NorthernMountains,
    /// Arid and desert west (Balochistan plateau)
    AridWest,
    /// Southern coastal belt and delta
    SouthernCoastal,
    /// High-density urban / industrial cluster
    UrbanIndustrial,
    /// Everything else
    Central,
}

/// Named high-density rectangle used by the emission classifier.
#[derive(Debug, Clone, Copy)]
pub struct UrbanCluster {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Major urban/industrial clusters, checked in order.
pub const URBAN_CLUSTERS: &[UrbanCluster] = &[
    UrbanCluster { name: "Karachi", min_lat: 24.60, max_lat: 25.10, min_lon: 66.70, max_lon: 67.40 },
    UrbanCluster { name: "Lahore", min_lat: 31.30, max_lat: 31.80, min_lon: 74.10, max_lon: 74.60 },
    UrbanCluster { name: "Faisalabad", min_lat: 31.20, max_lat: 31.70, min_lon: 72.80, max_lon: 73.30 },
    UrbanCluster { name: "Rawalpindi-Islamabad", min_lat: 33.40, max_lat: 33.90, min_lon: 72.80, max_lon: 73.40 },
    UrbanCluster { name: "Peshawar", min_lat: 33.80, max_lat: 34.20, min_lon: 71.30, max_lon: 71.80 },
    UrbanCluster { name: "Multan", min_lat: 30.00, max_lat: 30.40, min_lon: 71.20, max_lon: 71.70 },
];

/// Find the urban cluster containing the point, if any.
pub fn urban_cluster(lat: f64, lon: f64) -> Option<&'static UrbanCluster> {
    URBAN_CLUSTERS
        .iter()
        .find(|c| lat >= c.min_lat && lat <= c.max_lat && lon >= c.min_lon && lon <= c.max_lon)
}

/// Agro-climatic zoning, priority ordered north to south.
pub fn classify_agro(lat: f64, lon: f64) -> RegionCategory {
    if lat >= 33.5 {
        RegionCategory::NorthernMountains
    } else if lat <= 25.5 {
        RegionCategory::SouthernCoastal
    } else if lon <= 66.5 {
        RegionCategory::AridWest
    } else if (67.5..=75.5).contains(&lon) {
        RegionCategory::IndusPlain
    } else {
        RegionCategory::Central
    }
}

/// Emission-regime zoning: an urban/industrial box match takes precedence
/// over the broader agro-climatic zones.
pub fn classify_emission(lat: f64, lon: f64) -> RegionCategory {
    if urban_cluster(lat, lon).is_some() {
        RegionCategory::UrbanIndustrial
    } else {
        classify_agro(lat, lon)
    }
}
