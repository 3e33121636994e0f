//! Canned natural-language insights.
//!
//! Pure threshold lookup over the computed statistics: a level sentence per
//! parameter from mean thresholds, a trend sentence when the series is not
//! stable, and a fallback line so the list is never empty.

use crate::params::Parameter;
use crate::stats::{Statistics, Trend};

/// Deterministic insight strings for a parameter's statistics. Always
/// returns at least one entry.
pub fn generate_insights(param: Parameter, stats: &Statistics) -> Vec<String> {
    let mut insights = Vec::new();

    match param {
        Parameter::Ndvi => {
            if stats.mean >= 0.5 {
                insights.push("Dense, healthy vegetation cover, consistent with irrigated cropland or forest.".to_string());
            } else if stats.mean >= 0.3 {
                insights.push("Moderate vegetation cover, typical of mixed cropland and rangeland.".to_string());
            } else {
                insights.push("Sparse vegetation cover, consistent with arid or built-up terrain.".to_string());
            }
            if stats.max - stats.min > 0.2 {
                insights.push("Strong seasonal swing between the pre-monsoon low and the monsoon green-up.".to_string());
            }
        }
        Parameter::Aerosol => {
            if stats.mean >= 1.2 {
                insights.push("Elevated aerosol load, typical of dust transport and dense urban haze.".to_string());
            } else if stats.mean >= 0.7 {
                insights.push("Moderate aerosol load with a clear pre-monsoon dust season.".to_string());
            } else {
                insights.push("Low aerosol load, characteristic of mountain or well-ventilated terrain.".to_string());
            }
        }
        Parameter::No2 => {
            if stats.mean >= 5.0e15 {
                insights.push("NO2 columns are elevated, consistent with dense traffic and industrial emissions.".to_string());
            } else if stats.mean >= 2.0e15 {
                insights.push("NO2 columns are moderate, typical of settled agricultural districts.".to_string());
            } else {
                insights.push("NO2 columns are low, indicating limited combustion sources nearby.".to_string());
            }
        }
        Parameter::So2 => {
            if stats.mean >= 1.2e15 {
                insights.push("SO2 columns are elevated, pointing to nearby power generation or heavy industry.".to_string());
            } else if stats.mean >= 5.0e14 {
                insights.push("SO2 columns are moderate for the region.".to_string());
            } else {
                insights.push("SO2 columns are low, with no significant industrial signature.".to_string());
            }
        }
        Parameter::Co => {
            if stats.mean >= 2.6e18 {
                insights.push("CO columns are elevated, consistent with urban combustion and seasonal crop burning.".to_string());
            } else if stats.mean >= 2.0e18 {
                insights.push("CO columns are near the regional background with a winter burning peak.".to_string());
            } else {
                insights.push("CO columns are below the regional background.".to_string());
            }
        }
    }

    match stats.trend {
        Trend::Increasing => insights.push(format!(
            "Values show an increasing tendency of about {:.1}% over the selected period.",
            stats.trend_percent
        )),
        Trend::Decreasing => insights.push(format!(
            "Values show a decreasing tendency of about {:.1}% over the selected period.",
            stats.trend_percent.abs()
        )),
        Trend::Stable => {}
    }

    if insights.is_empty() {
        insights.push("Values are within the typical range for this parameter.".to_string());
    }

    insights
}
