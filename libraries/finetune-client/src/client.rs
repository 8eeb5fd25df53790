//! HTTP catalog client.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use finetune_core::{
    Acknowledgement, CatalogService, PlayNotification, Track, TrackId, TrackQuery,
};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for a Finetune catalog server.
///
/// Speaks the `/api/tracks` endpoints and implements [`CatalogService`], so a
/// player can use a remote catalog wherever it would use a local one.
///
/// # Example
///
/// ```ignore
/// use finetune_client::{CatalogClient, ClientConfig};
/// use finetune_core::TrackQuery;
///
/// let client = CatalogClient::new(ClientConfig::new("https://music.example.com"))?;
/// let tracks = client.fetch_tracks(&TrackQuery::new(Some("Baroque"), None)).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Finetune/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tracks_url(&self) -> String {
        format!("{}/api/tracks", self.base_url)
    }

    /// Fetch the tracks matching `query`.
    ///
    /// `genre` is omitted for the unfiltered genre and `search` when empty,
    /// so the server applies its defaults.
    pub async fn fetch_tracks(&self, query: &TrackQuery) -> Result<Vec<Track>> {
        let url = self.tracks_url();

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(genre) = query.genre.as_param() {
            params.push(("genre", genre));
        }
        if !query.search.is_empty() {
            params.push(("search", query.search.as_str()));
        }

        debug!(url = %url, genre = %query.genre, search = %query.search, "Fetching tracks");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let response = check_status(response).await?;
        let tracks: Vec<Track> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse track list: {}", e))
        })?;

        debug!(count = tracks.len(), "Fetched tracks");
        Ok(tracks)
    }

    /// Tell the server a track was selected for playback.
    pub async fn report_play(&self, track_id: TrackId) -> Result<Acknowledgement> {
        let url = self.tracks_url();
        debug!(url = %url, %track_id, "Reporting play");

        let response = self
            .http
            .post(&url)
            .json(&PlayNotification::play(track_id))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let response = check_status(response).await?;
        let ack: Acknowledgement = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse acknowledgement: {}", e))
        })?;

        info!(%track_id, success = ack.success, "Play reported");
        Ok(ack)
    }
}

/// Turn a non-success response into `ClientError::Server`
///
/// Uses the `error` field of a JSON body when present, the raw body otherwise.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or(body);

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn list(&self, query: &TrackQuery) -> finetune_core::Result<Vec<Track>> {
        Ok(self.fetch_tracks(query).await?)
    }

    async fn notify_play(&self, track_id: TrackId) -> finetune_core::Result<Acknowledgement> {
        Ok(self.report_play(track_id).await?)
    }
}
