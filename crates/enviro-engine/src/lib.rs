//! Environmental Time-Series Engine
//!
//! Deterministic synthesis of monthly environmental indicator series for
//! Pakistan (NDVI, UV aerosol index, NO2, SO2, CO), plus the statistics,
//! insight, and export layers that sit on top of a generated series.
//!
//! All values are synthetic approximations keyed to location and calendar
//! date. Identical inputs always yield byte-identical output: there is no
//! wall-clock, hardware entropy, or ambient randomness anywhere in this
//! crate.

pub mod events;
pub mod export;
pub mod insights;
pub mod noise;
pub mod params;
pub mod stats;
pub mod synth;

pub use export::{to_csv, to_geojson, ExportError, ExportFormat};
pub use insights::generate_insights;
pub use params::{Parameter, ParameterSpec, RegionProfile, UnknownParameter};
pub use stats::{compute_stats, national_stats, NationalStatistics, Statistics, Trend};
pub use synth::{synthesize, Target, TimeSeriesPoint};
