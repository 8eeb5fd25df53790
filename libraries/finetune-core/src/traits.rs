/// Core traits for Finetune
use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Acknowledgement, Track, TrackId, TrackQuery};

/// Catalog query service
///
/// Implemented by the in-memory catalog (server side) and by the HTTP client
/// (player side). Any datastore able to answer a filtered listing fits here.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List tracks matching `query`, in the catalog's natural order
    ///
    /// An empty result is valid, not an error.
    async fn list(&self, query: &TrackQuery) -> Result<Vec<Track>>;

    /// Record that a track was selected for playback
    ///
    /// Advisory only. Unknown ids are accepted; callers must not depend on
    /// this succeeding.
    async fn notify_play(&self, track_id: TrackId) -> Result<Acknowledgement>;

    /// Look up a single track by id
    ///
    /// The default scans the unfiltered listing.
    async fn find(&self, track_id: TrackId) -> Result<Option<Track>> {
        let tracks = self.list(&TrackQuery::all()).await?;
        Ok(tracks.into_iter().find(|track| track.id == track_id))
    }
}
