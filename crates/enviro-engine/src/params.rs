//! Static descriptors for the five environmental indicators.
//!
//! Each `ParameterSpec` carries everything the synthesizer and the UI need:
//! unit, physical clamp range, palette, satellite labels, seasonal phase
//! constants, and the per-region `{base, seasonal_amplitude, annual_trend}`
//! table. All numbers are hand-tuned illustrative constants; they encode no
//! measured ground truth and any edit is a behavior change.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use pak_geo::RegionCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environmental indicator served by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Ndvi,
    Aerosol,
    No2,
    So2,
    Co,
}

#[derive(Debug, Clone, Error)]
#[error("unknown parameter: {0}")]
pub struct UnknownParameter(pub String);

impl FromStr for Parameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ndvi" | "vegetation" => Ok(Parameter::Ndvi),
            "aerosol" | "uvai" => Ok(Parameter::Aerosol),
            "no2" | "nitrogen-dioxide" => Ok(Parameter::No2),
            "so2" | "sulfur-dioxide" => Ok(Parameter::So2),
            "co" | "carbon-monoxide" => Ok(Parameter::Co),
            other => Err(UnknownParameter(other.to_string())),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().id)
    }
}

/// Base level, seasonal swing, and per-year drift for one region regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub base: f64,
    pub seasonal_amplitude: f64,
    pub annual_trend: f64,
}

/// Per-region profile table, one entry per `RegionCategory`.
#[derive(Debug, Clone, Copy)]
pub struct RegionTable {
    pub indus_plain: RegionProfile,
    pub northern_mountains: RegionProfile,
    pub arid_west: RegionProfile,
    pub southern_coastal: RegionProfile,
    pub urban_industrial: RegionProfile,
    pub central: RegionProfile,
}

impl RegionTable {
    pub fn get(&self, region: RegionCategory) -> RegionProfile {
        match region {
            RegionCategory::IndusPlain => self.indus_plain,
            RegionCategory::NorthernMountains => self.northern_mountains,
            RegionCategory::AridWest => self.arid_west,
            RegionCategory::SouthernCoastal => self.southern_coastal,
            RegionCategory::UrbanIndustrial => self.urban_industrial,
            RegionCategory::Central => self.central,
        }
    }
}

/// Static descriptor for one indicator.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    /// Physically plausible clamp range for synthesized values.
    pub min_value: f64,
    pub max_value: f64,
    pub palette: &'static [&'static str],
    pub satellite: &'static str,
    pub source: &'static str,
    /// Descriptive strings for nation-wide responses; fixed per parameter,
    /// never computed from a series.
    pub peak_month: &'static str,
    pub low_month: &'static str,
    /// Emission-weighted parameters classify regions with the urban boxes
    /// taking precedence; vegetation uses the plain agro zoning.
    pub emission_weighted: bool,
    /// Noise half-amplitude as a fraction of the regional base level.
    pub noise_frac: f64,
    /// Uncertainty half-width as a fraction of the regional base level.
    pub uncertainty_frac: f64,
    /// Phase of the primary annual sinusoid (radians on the month angle).
    pub phase_primary: f64,
    /// Phase and weight of the semi-annual sinusoid.
    pub phase_secondary: f64,
    pub secondary_weight: f64,
    pub regions: RegionTable,
    /// Profile used for nation-wide series, which have no anchor point.
    pub national: RegionProfile,
}

impl ParameterSpec {
    /// Regional profile for a point, honoring the parameter's classifier
    /// priority (urban boxes first for emission-weighted parameters).
    pub fn profile_at(&self, lat: f64, lon: f64) -> RegionProfile {
        let region = if self.emission_weighted {
            pak_geo::classify_emission(lat, lon)
        } else {
            pak_geo::classify_agro(lat, lon)
        };
        self.regions.get(region)
    }
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Ndvi,
        Parameter::Aerosol,
        Parameter::No2,
        Parameter::So2,
        Parameter::Co,
    ];

    pub fn spec(self) -> &'static ParameterSpec {
        match self {
            Parameter::Ndvi => &NDVI,
            Parameter::Aerosol => &AEROSOL,
            Parameter::No2 => &NO2,
            Parameter::So2 => &SO2,
            Parameter::Co => &CO,
        }
    }
}

// Seasonal phases place the annual peak at physically motivated months:
// theta = (month - 1) / 12 * 2*PI, peak where sin(theta + phase) = 1.

/// Vegetation peaks with the monsoon green-up (Aug-Sep); the semi-annual
/// term adds the rabi harvest shoulder (Feb-Mar).
static NDVI: ParameterSpec = ParameterSpec {
    id: "ndvi",
    name: "Vegetation Index (NDVI)",
    unit: "NDVI",
    min_value: 0.05,
    max_value: 0.9,
    palette: &["#f7fcf5", "#c7e9c0", "#74c476", "#238b45", "#00441b"],
    satellite: "MODIS Terra",
    source: "MOD13Q1 (synthetic)",
    peak_month: "August-September (monsoon green-up)",
    low_month: "May-June (pre-monsoon)",
    emission_weighted: false,
    noise_frac: 0.06,
    uncertainty_frac: 0.05,
    phase_primary: -3.0 * PI / 4.0,
    phase_secondary: -PI / 6.0,
    secondary_weight: 0.35,
    regions: RegionTable {
        indus_plain: RegionProfile { base: 0.52, seasonal_amplitude: 0.16, annual_trend: -0.002 },
        northern_mountains: RegionProfile { base: 0.34, seasonal_amplitude: 0.13, annual_trend: 0.001 },
        arid_west: RegionProfile { base: 0.14, seasonal_amplitude: 0.05, annual_trend: -0.001 },
        southern_coastal: RegionProfile { base: 0.28, seasonal_amplitude: 0.09, annual_trend: -0.001 },
        urban_industrial: RegionProfile { base: 0.24, seasonal_amplitude: 0.07, annual_trend: -0.003 },
        central: RegionProfile { base: 0.38, seasonal_amplitude: 0.12, annual_trend: 0.0 },
    },
    national: RegionProfile { base: 0.40, seasonal_amplitude: 0.12, annual_trend: -0.001 },
};

/// Aerosol load peaks in the pre-monsoon dust season (May-June).
static AEROSOL: ParameterSpec = ParameterSpec {
    id: "aerosol",
    name: "UV Aerosol Index",
    unit: "UVAI",
    min_value: -1.0,
    max_value: 3.0,
    palette: &["#ffffd4", "#fed98e", "#fe9929", "#d95f0e", "#993404"],
    satellite: "Sentinel-5P TROPOMI",
    source: "TROPOMI UV Aerosol Index (synthetic)",
    peak_month: "May-June (pre-monsoon dust)",
    low_month: "December-January",
    emission_weighted: true,
    noise_frac: 0.12,
    uncertainty_frac: 0.10,
    phase_primary: -PI / 4.0,
    phase_secondary: 0.0,
    secondary_weight: 0.15,
    regions: RegionTable {
        indus_plain: RegionProfile { base: 1.05, seasonal_amplitude: 0.45, annual_trend: 0.012 },
        northern_mountains: RegionProfile { base: 0.30, seasonal_amplitude: 0.15, annual_trend: 0.002 },
        arid_west: RegionProfile { base: 1.20, seasonal_amplitude: 0.50, annual_trend: 0.008 },
        southern_coastal: RegionProfile { base: 0.80, seasonal_amplitude: 0.35, annual_trend: 0.006 },
        urban_industrial: RegionProfile { base: 1.45, seasonal_amplitude: 0.50, annual_trend: 0.015 },
        central: RegionProfile { base: 0.90, seasonal_amplitude: 0.40, annual_trend: 0.008 },
    },
    national: RegionProfile { base: 0.95, seasonal_amplitude: 0.40, annual_trend: 0.010 },
};

/// NO2 columns peak under winter inversions and dip in the monsoon; the
/// semi-annual term adds the post-harvest burning shoulder (Oct-Nov).
static NO2: ParameterSpec = ParameterSpec {
    id: "no2",
    name: "Nitrogen Dioxide (tropospheric column)",
    unit: "molecules/cm\u{b2}",
    min_value: 5.0e14,
    max_value: 3.0e16,
    palette: &["#fff5f0", "#fcbba1", "#fb6a4a", "#cb181d", "#67000d"],
    satellite: "Sentinel-5P TROPOMI",
    source: "TROPOMI L3 NO2 (synthetic)",
    peak_month: "December-January (winter inversion)",
    low_month: "July-August (monsoon washout)",
    emission_weighted: true,
    noise_frac: 0.10,
    uncertainty_frac: 0.08,
    phase_primary: 7.0 * PI / 12.0,
    phase_secondary: -2.0 * PI / 3.0,
    secondary_weight: 0.20,
    regions: RegionTable {
        indus_plain: RegionProfile { base: 3.2e15, seasonal_amplitude: 9.0e14, annual_trend: 6.0e13 },
        northern_mountains: RegionProfile { base: 8.0e14, seasonal_amplitude: 1.5e14, annual_trend: 5.0e12 },
        arid_west: RegionProfile { base: 1.2e15, seasonal_amplitude: 2.5e14, annual_trend: 1.0e13 },
        southern_coastal: RegionProfile { base: 2.4e15, seasonal_amplitude: 6.0e14, annual_trend: 4.0e13 },
        urban_industrial: RegionProfile { base: 8.5e15, seasonal_amplitude: 2.4e15, annual_trend: 1.5e14 },
        central: RegionProfile { base: 2.0e15, seasonal_amplitude: 5.0e14, annual_trend: 3.0e13 },
    },
    national: RegionProfile { base: 2.6e15, seasonal_amplitude: 7.0e14, annual_trend: 5.0e13 },
};

/// SO2 tracks heavy industry and power generation; winter peaking.
static SO2: ParameterSpec = ParameterSpec {
    id: "so2",
    name: "Sulfur Dioxide (column)",
    unit: "molecules/cm\u{b2}",
    min_value: 1.0e14,
    max_value: 8.0e15,
    palette: &["#f7fbff", "#c6dbef", "#6baed6", "#2171b5", "#08306b"],
    satellite: "Sentinel-5P TROPOMI",
    source: "TROPOMI L3 SO2 (synthetic)",
    peak_month: "December-January (heating and load peak)",
    low_month: "July-August (monsoon washout)",
    emission_weighted: true,
    noise_frac: 0.14,
    uncertainty_frac: 0.12,
    phase_primary: 7.0 * PI / 12.0,
    phase_secondary: 0.0,
    secondary_weight: 0.10,
    regions: RegionTable {
        indus_plain: RegionProfile { base: 7.5e14, seasonal_amplitude: 2.0e14, annual_trend: 8.0e12 },
        northern_mountains: RegionProfile { base: 2.0e14, seasonal_amplitude: 4.0e13, annual_trend: 0.0 },
        arid_west: RegionProfile { base: 3.5e14, seasonal_amplitude: 8.0e13, annual_trend: 2.0e12 },
        southern_coastal: RegionProfile { base: 9.0e14, seasonal_amplitude: 2.5e14, annual_trend: 1.2e13 },
        urban_industrial: RegionProfile { base: 1.9e15, seasonal_amplitude: 5.0e14, annual_trend: 2.0e13 },
        central: RegionProfile { base: 6.0e14, seasonal_amplitude: 1.5e14, annual_trend: 5.0e12 },
    },
    national: RegionProfile { base: 7.0e14, seasonal_amplitude: 1.8e14, annual_trend: 8.0e12 },
};

/// CO columns peak with crop residue burning and winter heating (Nov-Jan).
static CO: ParameterSpec = ParameterSpec {
    id: "co",
    name: "Carbon Monoxide (total column)",
    unit: "molecules/cm\u{b2}",
    min_value: 5.0e17,
    max_value: 4.5e18,
    palette: &["#fcfbfd", "#dadaeb", "#9e9ac8", "#6a51a3", "#3f007d"],
    satellite: "Sentinel-5P TROPOMI",
    source: "TROPOMI L3 CO (synthetic)",
    peak_month: "November-January (crop residue burning and heating)",
    low_month: "July-August (monsoon ventilation)",
    emission_weighted: true,
    noise_frac: 0.07,
    uncertainty_frac: 0.06,
    phase_primary: 2.0 * PI / 3.0,
    phase_secondary: -2.0 * PI / 3.0,
    secondary_weight: 0.15,
    regions: RegionTable {
        indus_plain: RegionProfile { base: 2.3e18, seasonal_amplitude: 3.5e17, annual_trend: 1.2e16 },
        northern_mountains: RegionProfile { base: 1.6e18, seasonal_amplitude: 2.0e17, annual_trend: 0.0 },
        arid_west: RegionProfile { base: 1.8e18, seasonal_amplitude: 2.5e17, annual_trend: 5.0e15 },
        southern_coastal: RegionProfile { base: 2.1e18, seasonal_amplitude: 3.0e17, annual_trend: 8.0e15 },
        urban_industrial: RegionProfile { base: 2.9e18, seasonal_amplitude: 4.5e17, annual_trend: 2.5e16 },
        central: RegionProfile { base: 2.2e18, seasonal_amplitude: 3.0e17, annual_trend: 1.0e16 },
    },
    national: RegionProfile { base: 2.2e18, seasonal_amplitude: 3.2e17, annual_trend: 1.0e16 },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("NDVI".parse::<Parameter>().unwrap(), Parameter::Ndvi);
        assert_eq!("vegetation".parse::<Parameter>().unwrap(), Parameter::Ndvi);
        assert_eq!("no2".parse::<Parameter>().unwrap(), Parameter::No2);
        assert!("pm25".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_specs_have_sane_ranges() {
        for p in Parameter::ALL {
            let s = p.spec();
            assert!(s.min_value < s.max_value, "{}: inverted range", s.id);
            assert!(s.noise_frac > 0.0 && s.noise_frac < 0.5);
            assert!(s.uncertainty_frac > 0.0 && s.uncertainty_frac < 0.5);
            assert!(!s.palette.is_empty());
        }
    }

    #[test]
    fn test_region_bases_inside_physical_range() {
        for p in Parameter::ALL {
            let s = p.spec();
            let profiles = [
                s.regions.indus_plain,
                s.regions.northern_mountains,
                s.regions.arid_west,
                s.regions.southern_coastal,
                s.regions.urban_industrial,
                s.regions.central,
                s.national,
            ];
            for prof in profiles {
                assert!(
                    prof.base > s.min_value && prof.base < s.max_value,
                    "{}: base {} outside range",
                    s.id,
                    prof.base
                );
                assert!(prof.seasonal_amplitude >= 0.0);
            }
        }
    }

    #[test]
    fn test_urban_profile_selected_for_emission_parameters() {
        // Lahore city center
        let no2 = Parameter::No2.spec().profile_at(31.55, 74.35);
        assert_eq!(no2.base, Parameter::No2.spec().regions.urban_industrial.base);

        // Vegetation ignores the urban box and sees the irrigated plain
        let ndvi = Parameter::Ndvi.spec().profile_at(31.55, 74.35);
        assert_eq!(ndvi.base, Parameter::Ndvi.spec().regions.indus_plain.base);
    }
}
