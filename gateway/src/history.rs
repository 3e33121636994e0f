//! Analysis history and profile routes.
//!
//! A simple keyed record store behind its own router and state:
//! - insert / list / delete analysis snapshots per opaque user id
//! - upsert / fetch a profile blob per user id
//!
//! User ids come from an external authentication layer and are treated as
//! opaque strings here. Saved records are immutable; each insert is
//! independent, so concurrent saves need no coordination beyond the lock.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;

/// Shared store state for the history router.
#[derive(Clone, Default)]
pub struct HistoryState {
    inner: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    analyses: HashMap<String, Vec<AnalysisRecord>>,
    profiles: HashMap<String, serde_json::Value>,
}

/// A saved analysis snapshot. Immutable once created; deleted only by an
/// explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub parameter: String,
    pub geometry: pak_geo::Geometry,
    pub geometry_type: String,
    pub start_date: String,
    pub end_date: String,
    /// Snapshot of `{ timeSeries, stats, insights }` as returned to the
    /// client; stored opaquely.
    pub results: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub user_id: String,
    pub parameter: String,
    pub geometry: pak_geo::Geometry,
    pub start_date: String,
    pub end_date: String,
    pub results: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved: bool,
    pub record: AnalysisRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListResponse {
    pub user_id: String,
    pub records: Vec<AnalysisRecord>,
}

/// Build the history router with its own state.
pub fn history_routes(state: HistoryState) -> Router {
    Router::new()
        .route("/", post(save_analysis))
        .route("/:user_id", get(list_history))
        .route("/:user_id/:record_id", delete(delete_analysis))
        .route("/profile/:user_id", put(upsert_profile).get(get_profile))
        .with_state(state)
}

/// Save an analysis snapshot.
pub async fn save_analysis(
    State(state): State<HistoryState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    if req.user_id.is_empty() {
        return Err(ApiError::Validation("userId must not be empty".to_string()));
    }
    req.parameter
        .parse::<enviro_engine::Parameter>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        user_id: req.user_id.clone(),
        parameter: req.parameter,
        geometry_type: req.geometry.kind().to_string(),
        geometry: req.geometry,
        start_date: req.start_date,
        end_date: req.end_date,
        results: req.results,
        saved_at: Utc::now(),
    };

    let mut store = state.inner.write().await;
    store
        .analyses
        .entry(record.user_id.clone())
        .or_default()
        .push(record.clone());

    tracing::debug!(user = %record.user_id, id = %record.id, "analysis saved");
    Ok((StatusCode::CREATED, Json(SaveResponse { saved: true, record })))
}

/// List a user's saved analyses, newest first.
pub async fn list_history(
    State(state): State<HistoryState>,
    Path(user_id): Path<String>,
) -> Json<HistoryListResponse> {
    let store = state.inner.read().await;
    let mut records = store.analyses.get(&user_id).cloned().unwrap_or_default();
    records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    Json(HistoryListResponse { user_id, records })
}

/// Delete one saved analysis.
pub async fn delete_analysis(
    State(state): State<HistoryState>,
    Path((user_id, record_id)): Path<(String, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.inner.write().await;
    let records = store
        .analyses
        .get_mut(&user_id)
        .ok_or_else(|| ApiError::NotFound(format!("no history for user {user_id}")))?;

    let before = records.len();
    records.retain(|r| r.id != record_id);
    if records.len() == before {
        return Err(ApiError::NotFound(format!("record not found: {record_id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Upsert a user's profile blob.
pub async fn upsert_profile(
    State(state): State<HistoryState>,
    Path(user_id): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(profile) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    if user_id.is_empty() {
        return Err(ApiError::Validation("userId must not be empty".to_string()));
    }
    let mut store = state.inner.write().await;
    store.profiles.insert(user_id, profile.clone());
    Ok(Json(profile))
}

/// Fetch a user's profile blob.
pub async fn get_profile(
    State(state): State<HistoryState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = state.inner.read().await;
    store
        .profiles
        .get(&user_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no profile for user {user_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pak_geo::{GeoPoint, Geometry};
    use serde_json::json;

    fn save_request(user: &str) -> Result<Json<SaveRequest>, JsonRejection> {
        Ok(Json(SaveRequest {
            user_id: user.to_string(),
            parameter: "ndvi".to_string(),
            geometry: Geometry::Marker(GeoPoint { lat: 31.5, lon: 74.3 }),
            start_date: "2019-01-01".to_string(),
            end_date: "2025-12-01".to_string(),
            results: json!({ "timeSeries": [], "stats": {}, "insights": [] }),
        }))
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let state = HistoryState::default();
        let (status, res) = save_analysis(State(state.clone()), save_request("u1"))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(res.0.record.geometry_type, "marker");

        let list = list_history(State(state), Path("u1".to_string())).await;
        assert_eq!(list.0.records.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let state = HistoryState::default();
        let (_, res) = save_analysis(State(state.clone()), save_request("u1"))
            .await
            .unwrap();
        let id = res.0.record.id;

        let status = delete_analysis(State(state.clone()), Path(("u1".to_string(), id)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let list = list_history(State(state), Path("u1".to_string())).await;
        assert!(list.0.records.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_record_404() {
        let state = HistoryState::default();
        save_analysis(State(state.clone()), save_request("u1"))
            .await
            .unwrap();
        let err = delete_analysis(State(state), Path(("u1".to_string(), Uuid::new_v4())))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_parameter_rejected_on_save() {
        let state = HistoryState::default();
        let mut req = save_request("u1").unwrap();
        req.0.parameter = "pm25".to_string();
        let err = save_analysis(State(state), Ok(req)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_profile_upsert_overwrites() {
        let state = HistoryState::default();
        upsert_profile(
            State(state.clone()),
            Path("u1".to_string()),
            Ok(Json(json!({ "name": "A" }))),
        )
        .await
        .unwrap();
        upsert_profile(
            State(state.clone()),
            Path("u1".to_string()),
            Ok(Json(json!({ "name": "B" }))),
        )
        .await
        .unwrap();

        let profile = get_profile(State(state), Path("u1".to_string())).await.unwrap();
        assert_eq!(profile.0["name"], "B");
    }
}
