//! Catalog view state
//!
//! Holds the list a player displays. Every query change starts a new request
//! generation; a response is only applied if it belongs to the newest one, so a
//! slow response for an old query can never overwrite a newer list.

use finetune_core::{CatalogService, Track, TrackId, TrackQuery};
use tracing::{debug, warn};

/// Handle for one in-flight listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    query: TrackQuery,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query this request was issued for
    pub fn query(&self) -> &TrackQuery {
        &self.query
    }
}

/// What `CatalogView::apply` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// List replaced; carries the new length
    Applied(usize),

    /// A newer request was issued; response discarded
    Stale,

    /// Request failed; previous list kept
    Failed,
}

/// Filtered track list shown by a player
#[derive(Debug, Default)]
pub struct CatalogView {
    generation: u64,
    active_query: TrackQuery,
    tracks: Vec<Track>,
    last_error: Option<String>,
    loading: bool,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `query`, superseding any in flight
    pub fn begin(&mut self, query: TrackQuery) -> RequestTicket {
        self.generation += 1;
        self.active_query = query.clone();
        self.loading = true;

        debug!(generation = self.generation, genre = %query.genre, search = %query.search, "Catalog request started");

        RequestTicket {
            generation: self.generation,
            query,
        }
    }

    /// Apply the result of the request behind `ticket`
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: finetune_core::Result<Vec<Track>>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale catalog response"
            );
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(tracks) => {
                let count = tracks.len();
                self.tracks = tracks;
                self.last_error = None;
                ApplyOutcome::Applied(count)
            }
            Err(err) => {
                warn!(%err, "Catalog request failed, keeping previous list");
                self.last_error = Some(err.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    /// Issue `query` against `catalog` and apply the answer
    pub async fn refresh(&mut self, catalog: &dyn CatalogService, query: TrackQuery) -> ApplyOutcome {
        let ticket = self.begin(query);
        let result = catalog.list(ticket.query()).await;
        self.apply(ticket, result)
    }

    /// Currently displayed tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn find(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    /// Query of the newest request
    pub fn active_query(&self) -> &TrackQuery {
        &self.active_query
    }

    /// Message of the most recent failure, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the newest request is still outstanding
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finetune_core::{CoreError, InMemoryCatalog};

    fn sample(count: usize) -> Vec<Track> {
        InMemoryCatalog::classical().tracks()[..count].to_vec()
    }

    #[test]
    fn newest_response_wins() {
        let mut view = CatalogView::new();
        let first = view.begin(TrackQuery::new(Some("Baroque"), None));
        let second = view.begin(TrackQuery::new(Some("Ballet"), None));

        assert_eq!(view.apply(second, Ok(sample(2))), ApplyOutcome::Applied(2));
        assert_eq!(view.apply(first, Ok(sample(5))), ApplyOutcome::Stale);

        assert_eq!(view.tracks().len(), 2);
        assert_eq!(view.active_query().search, "");
        assert!(!view.is_loading());
    }

    #[test]
    fn stale_response_does_not_clear_loading() {
        let mut view = CatalogView::new();
        let first = view.begin(TrackQuery::all());
        let _second = view.begin(TrackQuery::all().with_search("debussy"));

        assert_eq!(view.apply(first, Ok(sample(1))), ApplyOutcome::Stale);
        assert!(view.is_loading());
        assert!(view.tracks().is_empty());
    }

    #[test]
    fn failure_keeps_previous_list() {
        let mut view = CatalogView::new();
        let ticket = view.begin(TrackQuery::all());
        view.apply(ticket, Ok(sample(3)));

        let ticket = view.begin(TrackQuery::all().with_search("x"));
        let outcome = view.apply(ticket, Err(CoreError::network("connection refused")));

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert_eq!(view.tracks().len(), 3);
        assert!(view.last_error().unwrap().contains("connection refused"));

        let ticket = view.begin(TrackQuery::all());
        view.apply(ticket, Ok(Vec::new()));
        assert!(view.last_error().is_none());
        assert!(view.tracks().is_empty());
    }

    #[tokio::test]
    async fn refresh_against_local_catalog() {
        let catalog = InMemoryCatalog::classical();
        let mut view = CatalogView::new();

        let outcome = view.refresh(&catalog, TrackQuery::new(None, Some("beethoven"))).await;

        assert_eq!(outcome, ApplyOutcome::Applied(3));
        assert!(view.find(TrackId::new(6)).is_some());
        assert!(view.find(TrackId::new(2)).is_none());
    }
}
