/// Tracks API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use finetune_core::{Acknowledgement, PlayReport, Track, TrackId, TrackQuery};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// GET /api/tracks
///
/// Always a JSON array in catalog order; unknown genres match nothing.
pub async fn list_tracks(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Track>>> {
    let query = TrackQuery::new(params.genre.as_deref(), params.search.as_deref());
    let tracks = app_state.catalog.list(&query).await?;
    Ok(Json(tracks))
}

/// GET /api/tracks/:id
pub async fn get_track(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Track>> {
    let not_found = || ServerError::NotFound("Track not found".to_string());

    let track_id: TrackId = id.parse().map_err(|_| not_found())?;
    let track = app_state
        .catalog
        .find(track_id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(track))
}

/// POST /api/tracks
///
/// Advisory play notification. Any JSON body is acknowledged; only a `play`
/// action with a usable id reaches the catalog. Non-JSON bodies are a 400.
pub async fn notify_play(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement>> {
    let Json(body) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let report = PlayReport::from_body(body);

    match report.played_track() {
        Some(track_id) => {
            // Notification failures are not the caller's concern
            if let Err(e) = app_state.catalog.notify_play(track_id).await {
                tracing::warn!(%track_id, "Play notification failed: {}", e);
            }
        }
        None => {
            tracing::debug!(track_id = %report.track_id, action = %report.action, "Ignoring track action");
        }
    }

    Ok(Json(Acknowledgement::OK))
}
