//! Pakistan Geography Library
//!
//! Shared geographic primitives for the environmental dashboard:
//! - National bounding-box validation
//! - Drawn geometry (marker / polygon / rectangle) and centroid reduction
//! - Coarse land-cover / emission-regime classification

pub mod bounds;
pub mod geometry;
pub mod region;

pub use bounds::{is_inside_pakistan, Bounds, PAKISTAN_BOUNDS};
pub use geometry::{GeoPoint, Geometry};
pub use region::{classify_agro, classify_emission, RegionCategory};
