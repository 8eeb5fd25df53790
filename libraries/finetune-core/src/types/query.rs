//! Catalog query

use crate::types::{GenreFilter, Track};

/// Filter applied to a catalog listing
///
/// Genre and search compose with logical AND. An empty search matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TrackQuery {
    /// Genre restriction
    pub genre: GenreFilter,

    /// Free-text search over title and composer
    pub search: String,
}

impl TrackQuery {
    /// Build a query from raw request values
    pub fn new(genre: Option<&str>, search: Option<&str>) -> Self {
        Self {
            genre: GenreFilter::parse(genre),
            search: search.unwrap_or_default().to_string(),
        }
    }

    /// Query matching the whole catalog
    pub fn all() -> Self {
        Self::default()
    }

    /// Replace the genre restriction
    pub fn with_genre(mut self, genre: impl Into<GenreFilter>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Replace the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any restriction is in effect
    pub fn is_unfiltered(&self) -> bool {
        self.genre == GenreFilter::All && self.search.is_empty()
    }

    /// Check a single track against the query
    pub fn matches(&self, track: &Track) -> bool {
        self.genre.admits(track.genre) && track.matches_search(&self.search.to_lowercase())
    }

    /// Select matching tracks, preserving input order
    pub fn filter<'a, I>(&self, tracks: I) -> Vec<Track>
    where
        I: IntoIterator<Item = &'a Track>,
    {
        tracks
            .into_iter()
            .filter(|track| self.matches(track))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Genre;

    #[test]
    fn new_parses_raw_values() {
        let query = TrackQuery::new(Some("Baroque"), Some("canon"));
        assert_eq!(query.genre, GenreFilter::Only(Genre::Baroque));
        assert_eq!(query.search, "canon");

        let query = TrackQuery::new(None, None);
        assert!(query.is_unfiltered());
    }

    #[test]
    fn builder_methods() {
        let query = TrackQuery::all()
            .with_genre(Genre::Sonata)
            .with_search("moon");
        assert_eq!(query.genre, GenreFilter::Only(Genre::Sonata));
        assert_eq!(query.search, "moon");
        assert!(!query.is_unfiltered());
    }

    #[test]
    fn matches_requires_genre_and_search() {
        let catalog = crate::InMemoryCatalog::classical();
        let canon = &catalog.tracks()[1];

        assert!(TrackQuery::new(Some("Baroque"), Some("PACHELBEL")).matches(canon));
        assert!(!TrackQuery::new(Some("Sonata"), Some("pachelbel")).matches(canon));
        assert!(!TrackQuery::new(Some("baroque"), None).matches(canon));
        assert_eq!(
            TrackQuery::new(Some("Polka"), None).filter(catalog.tracks()),
            Vec::<Track>::new()
        );
    }
}
