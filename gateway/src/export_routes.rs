//! Export routes: format an already-computed result as CSV or GeoJSON.
//!
//! Shapefile is declared but answers with a validation error; there is no
//! server-side shapefile writer.

use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use enviro_engine::{compute_stats, ExportError, ExportFormat, Statistics, TimeSeriesPoint};
use pak_geo::Geometry;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub parameter: String,
    pub geometry: Geometry,
    pub time_series: Vec<TimeSeriesPoint>,
    /// Optional precomputed stats; recomputed from the series if absent.
    pub stats: Option<Statistics>,
}

/// Format a computed result in the requested export format.
pub async fn export_result(
    Path(format): Path<String>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let format = format
        .parse::<ExportFormat>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let param = req
        .parameter
        .parse::<enviro_engine::Parameter>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    match format {
        ExportFormat::Csv => {
            let csv = enviro_engine::to_csv(&req.time_series);
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"analysis.csv\"",
                    ),
                ],
                csv,
            )
                .into_response())
        }
        ExportFormat::GeoJson => {
            let stats = req
                .stats
                .unwrap_or_else(|| compute_stats(&req.time_series));
            let doc = enviro_engine::to_geojson(&req.geometry, param, &req.time_series, &stats)
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            Ok(Json(doc).into_response())
        }
        ExportFormat::Shapefile => {
            Err(ApiError::Validation(ExportError::ShapefileUnsupported.to_string()))
        }
    }
}
