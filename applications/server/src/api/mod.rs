/// API route modules
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod health;
pub mod tracks;

/// Build the application router
pub fn router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/tracks", get(tracks::list_tracks).post(tracks::notify_play))
        .route("/tracks/:id", get(tracks::get_track));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
