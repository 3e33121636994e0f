//! Analysis routes: per-point and nation-wide handlers plus the parameter
//! catalog. Handlers validate, invoke the engine, and shape the JSON
//! response; all computation is synchronous pure work over a small series.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use enviro_engine::{
    compute_stats, generate_insights, national_stats, synthesize, NationalStatistics, Parameter,
    Statistics, Target, TimeSeriesPoint,
};
use pak_geo::{is_inside_pakistan, GeoPoint};

use crate::error::ApiError;

pub const DEFAULT_START_YEAR: i32 = 2019;
pub const DEFAULT_END_YEAR: i32 = 2025;

/// Accepted year window. Wider values carry no scripted events and would
/// only inflate the series, so they are rejected at the boundary.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub lat: f64,
    pub lon: f64,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub location: GeoPoint,
    pub date_range: DateRange,
    pub time_series: Vec<TimeSeriesPoint>,
    pub stats: Statistics,
    pub insights: Vec<String>,
    pub source: String,
    pub satellite: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalQuery {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalResponse {
    pub success: bool,
    pub country: &'static str,
    pub date_range: DateRange,
    pub national_time_series: Vec<TimeSeriesPoint>,
    pub stats: NationalStatistics,
    pub insights: Vec<String>,
    pub source: String,
    pub satellite: String,
}

/// Catalog entry for the dashboard's parameter picker.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub valid_range: [f64; 2],
    pub palette: &'static [&'static str],
    pub satellite: &'static str,
    pub source: &'static str,
}

fn parse_parameter(raw: &str) -> Result<Parameter, ApiError> {
    raw.parse::<Parameter>()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

fn resolve_years(start: Option<i32>, end: Option<i32>) -> Result<DateRange, ApiError> {
    let range = DateRange {
        start_year: start.unwrap_or(DEFAULT_START_YEAR),
        end_year: end.unwrap_or(DEFAULT_END_YEAR),
    };
    for year in [range.start_year, range.end_year] {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ApiError::Validation(format!(
                "years must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
    }
    if range.start_year > range.end_year {
        return Err(ApiError::Validation(format!(
            "startYear {} is after endYear {}",
            range.start_year, range.end_year
        )));
    }
    Ok(range)
}

/// Per-point analysis for one parameter. A malformed body is a validation
/// failure like any other and leaves as the documented 400 JSON shape.
pub async fn analyze_point(
    Path(parameter): Path<String>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let param = parse_parameter(&parameter)?;

    if !req.lat.is_finite() || !req.lon.is_finite() {
        return Err(ApiError::Validation("malformed coordinates".to_string()));
    }
    if !is_inside_pakistan(req.lat, req.lon) {
        return Err(ApiError::OutOfBounds);
    }
    let range = resolve_years(req.start_year, req.end_year)?;

    tracing::debug!(%param, lat = req.lat, lon = req.lon, "point analysis");

    let series = synthesize(
        param,
        Target::Point { lat: req.lat, lon: req.lon },
        range.start_year,
        range.end_year,
    );
    let stats = compute_stats(&series);
    let insights = generate_insights(param, &stats);
    let spec = param.spec();

    Ok(Json(AnalysisResponse {
        success: true,
        location: GeoPoint { lat: req.lat, lon: req.lon },
        date_range: range,
        time_series: series,
        stats,
        insights,
        source: spec.source.to_string(),
        satellite: spec.satellite.to_string(),
    }))
}

/// Nation-wide aggregate analysis for one parameter.
pub async fn national_analysis(
    Path(parameter): Path<String>,
    query: Result<Query<NationalQuery>, QueryRejection>,
) -> Result<Json<NationalResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let param = parse_parameter(&parameter)?;
    let range = resolve_years(query.start_year, query.end_year)?;

    tracing::debug!(%param, "national analysis");

    let series = synthesize(param, Target::National, range.start_year, range.end_year);
    let stats = national_stats(param, &series);
    let series_stats = compute_stats(&series);
    let insights = generate_insights(param, &series_stats);
    let spec = param.spec();

    Ok(Json(NationalResponse {
        success: true,
        country: "Pakistan",
        date_range: range,
        national_time_series: series,
        stats,
        insights,
        source: spec.source.to_string(),
        satellite: spec.satellite.to_string(),
    }))
}

/// List the five parameter descriptors for the UI.
pub async fn list_parameters() -> Json<Vec<ParameterInfo>> {
    let infos = Parameter::ALL
        .iter()
        .map(|p| {
            let s = p.spec();
            ParameterInfo {
                id: s.id,
                name: s.name,
                unit: s.unit,
                valid_range: [s.min_value, s.max_value],
                palette: s.palette,
                satellite: s.satellite,
                source: s.source,
            }
        })
        .collect();
    Json(infos)
}
