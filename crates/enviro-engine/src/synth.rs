//! Monthly time-series synthesizer.
//!
//! One value per calendar month over the requested inclusive year range,
//! composed as: regional base + seasonal sinusoids + scripted event deltas
//! + linear annual trend + seeded noise, clamped to the parameter's
//! physical range and rounded to 4 significant digits. Point targets also
//! carry a noise-perturbed uncertainty band.
//!
//! The whole pipeline is a pure function of its arguments: identical calls
//! return byte-identical series.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::events::event_rules;
use crate::noise::{location_seed, month_seed, seeded_unit, NATIONAL_SEED};
use crate::params::Parameter;

/// What the series is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// A single in-bounds point (a drawn shape reduces to its centroid
    /// before reaching the engine).
    Point { lat: f64, lon: f64 },
    /// Nation-wide aggregate: fixed national base, no uncertainty band.
    National,
}

/// One monthly sample. `min`/`max` form the uncertainty band and are only
/// present for point targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// First-of-month date stamp, `YYYY-MM-01`.
    pub date: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Round to `digits` significant figures. Total over finite floats; zero
/// and non-finite values pass through unchanged.
pub fn round_sig(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor();
    let factor = 10f64.powf(digits as f64 - 1.0 - magnitude);
    (value * factor).round() / factor
}

/// Longest year span one call will materialize. The boundary layer rejects
/// wider requests before they reach the engine; the clamp keeps the engine
/// itself total over any i32 pair.
pub const MAX_SPAN_YEARS: i32 = 200;

/// Synthesize the monthly series for `param` over `[start_year, end_year]`
/// inclusive. An inverted year range yields an empty series; spans wider
/// than `MAX_SPAN_YEARS` are truncated at the end.
pub fn synthesize(param: Parameter, target: Target, start_year: i32, end_year: i32) -> Vec<TimeSeriesPoint> {
    let spec = param.spec();

    let (profile, seed_base) = match target {
        Target::Point { lat, lon } => (spec.profile_at(lat, lon), location_seed(lat, lon)),
        Target::National => (spec.national, NATIONAL_SEED),
    };

    let mut series = Vec::new();
    if start_year > end_year {
        return series;
    }
    let end_year = end_year.min(start_year.saturating_add(MAX_SPAN_YEARS - 1));
    series.reserve(((end_year as i64 - start_year as i64 + 1) * 12) as usize);

    for year in start_year..=end_year {
        for month in 1..=12u32 {
            let theta = (month as f64 - 1.0) / 12.0 * TAU;
            let seasonal = profile.seasonal_amplitude
                * ((1.0 - spec.secondary_weight) * (theta + spec.phase_primary).sin()
                    + spec.secondary_weight * (2.0 * theta + spec.phase_secondary).sin());

            let mut value = profile.base + seasonal;

            for rule in event_rules(param) {
                if rule.applies(year, month) {
                    value += rule.delta_frac * profile.base;
                }
            }

            value += profile.annual_trend * (year - start_year) as f64;

            let seed = month_seed(seed_base, year, month);
            value += (seeded_unit(seed) - 0.5) * 2.0 * spec.noise_frac * profile.base;

            value = value.clamp(spec.min_value, spec.max_value);
            let value = round_sig(value, 4);

            let (min, max) = match target {
                Target::Point { .. } => {
                    // Separate draw so the band width does not track the
                    // value noise.
                    let u = seeded_unit(seed + 1);
                    let width = spec.uncertainty_frac * profile.base * (0.75 + 0.5 * u);
                    (
                        Some(round_sig((value - width).max(spec.min_value), 4)),
                        Some(round_sig((value + width).min(spec.max_value), 4)),
                    )
                }
                Target::National => (None, None),
            };

            series.push(TimeSeriesPoint {
                date: format!("{year:04}-{month:02}-01"),
                value,
                min,
                max,
            });
        }
    }

    series
}
