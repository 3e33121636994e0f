//! Descriptive statistics and trend classification over a monthly series.

use serde::{Deserialize, Serialize};

use crate::params::Parameter;
use crate::synth::{round_sig, TimeSeriesPoint};

/// Trend percentages below this magnitude classify as stable.
pub const STABILITY_THRESHOLD_PCT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Summary statistics for a point-query series. Recomputed fresh per
/// request, never persisted apart from the series that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub trend: Trend,
    pub trend_percent: f64,
}

/// Nation-wide summary: the same reductions plus fixed descriptive peak/low
/// month strings taken from the parameter spec, not computed from the data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalStatistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub peak_month: &'static str,
    pub low_month: &'static str,
}

/// Population mean/min/max/stddev plus an OLS trend classification.
///
/// Trend: least-squares slope of value against 0-based index with centered
/// x, expressed as percent change over the whole series relative to the
/// mean. Series of length 0 or 1 have no defined slope and come back as
/// stable with `trend_percent = 0` rather than NaN.
pub fn compute_stats(series: &[TimeSeriesPoint]) -> Statistics {
    let n = series.len();
    if n == 0 {
        return Statistics {
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
            trend: Trend::Stable,
            trend_percent: 0.0,
        };
    }

    let mean = series.iter().map(|p| p.value).sum::<f64>() / n as f64;
    let min = series.iter().map(|p| p.value).fold(f64::MAX, f64::min);
    let max = series.iter().map(|p| p.value).fold(f64::MIN, f64::max);
    let variance = series.iter().map(|p| (p.value - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();

    let raw_trend_percent = if n < 2 || mean == 0.0 {
        0.0
    } else {
        let x_mean = (n as f64 - 1.0) / 2.0;
        let mut num = 0.0;
        let mut den = 0.0;
        for (i, p) in series.iter().enumerate() {
            let dx = i as f64 - x_mean;
            num += dx * (p.value - mean);
            den += dx * dx;
        }
        let slope = num / den;
        slope * n as f64 / mean * 100.0
    };

    // Classify on the raw percentage; rounding is display-only and must not
    // flip a value just under the threshold across it.
    let trend = if raw_trend_percent.abs() < STABILITY_THRESHOLD_PCT {
        Trend::Stable
    } else if raw_trend_percent > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    Statistics {
        mean: round_sig(mean, 4),
        min,
        max,
        std_dev: round_sig(std_dev, 4),
        trend,
        trend_percent: round_sig(raw_trend_percent, 4),
    }
}

/// Nation-wide reduction: numeric summary plus the parameter's canned
/// peak/low month descriptions.
pub fn national_stats(param: Parameter, series: &[TimeSeriesPoint]) -> NationalStatistics {
    let spec = param.spec();
    let stats = compute_stats(series);
    NationalStatistics {
        mean: stats.mean,
        min: stats.min,
        max: stats.max,
        std_dev: stats.std_dev,
        peak_month: spec.peak_month,
        low_month: spec.low_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> TimeSeriesPoint {
        TimeSeriesPoint { date: date.to_string(), value, min: None, max: None }
    }

    #[test]
    fn test_flat_series_is_stable() {
        let series: Vec<_> = (1..=12)
            .map(|m| point(&format!("2020-{m:02}-01"), 0.5))
            .collect();
        let stats = compute_stats(&series);
        assert_eq!(stats.trend, Trend::Stable);
        assert!(stats.trend_percent.abs() < 1e-9);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty_series_degenerate() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.trend_percent, 0.0);
        assert!(!stats.mean.is_nan());
    }

    #[test]
    fn test_single_point_degenerate() {
        let stats = compute_stats(&[point("2020-01-01", 0.42)]);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.trend_percent, 0.0);
        assert_eq!(stats.mean, 0.42);
        assert_eq!(stats.min, 0.42);
        assert_eq!(stats.max, 0.42);
    }

    #[test]
    fn test_rising_series_classified_increasing() {
        let series: Vec<_> = (0..12)
            .map(|i| point(&format!("2020-{:02}-01", i + 1), 1.0 + i as f64 * 0.1))
            .collect();
        let stats = compute_stats(&series);
        assert_eq!(stats.trend, Trend::Increasing);
        assert!(stats.trend_percent > STABILITY_THRESHOLD_PCT);
        assert_eq!(stats.min, 1.0);
        assert!((stats.max - 2.1).abs() < 1e-9);
    }

    #[test]
    fn test_falling_series_classified_decreasing() {
        let series: Vec<_> = (0..12)
            .map(|i| point(&format!("2020-{:02}-01", i + 1), 2.0 - i as f64 * 0.1))
            .collect();
        assert_eq!(compute_stats(&series).trend, Trend::Decreasing);
    }

    #[test]
    fn test_classification_uses_raw_trend_before_rounding() {
        // Raw trend percent here is ~1.99995: it rounds to 2.000 for
        // display but must still classify as stable.
        let series = vec![point("2020-01-01", 1.0), point("2020-02-01", 1.01005)];
        let stats = compute_stats(&series);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.trend_percent, 2.0);
    }

    #[test]
    fn test_zero_mean_series_has_zero_trend_percent() {
        let series = vec![point("2020-01-01", -1.0), point("2020-02-01", 1.0), point("2020-03-01", 0.0)];
        // mean is 0: trend percent defined as 0 rather than dividing by it
        let stats = compute_stats(&series);
        assert_eq!(stats.trend_percent, 0.0);
        assert_eq!(stats.trend, Trend::Stable);
    }

    #[test]
    fn test_national_stats_carry_canned_months() {
        let series: Vec<_> = (1..=12)
            .map(|m| point(&format!("2020-{m:02}-01"), 0.4))
            .collect();
        let stats = national_stats(Parameter::Ndvi, &series);
        assert_eq!(stats.peak_month, Parameter::Ndvi.spec().peak_month);
        assert_eq!(stats.low_month, Parameter::Ndvi.spec().low_month);
        assert_eq!(stats.mean, 0.4);
    }

    #[test]
    fn test_camel_case_serialization() {
        let stats = compute_stats(&[point("2020-01-01", 1.0)]);
        let v = serde_json::to_value(stats).unwrap();
        assert!(v.get("stdDev").is_some());
        assert!(v.get("trendPercent").is_some());
        assert_eq!(v["trend"], "stable");
    }
}
