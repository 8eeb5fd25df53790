//! In-memory catalog
//!
//! A fixed, ordered track collection answering filtered listings. Stands in
//! for any datastore behind the `CatalogService` trait.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::error::{CoreError, Result};
use crate::traits::CatalogService;
use crate::types::{Acknowledgement, Genre, Track, TrackId, TrackQuery};

const DEMO_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

/// Catalog backed by a `Vec<Track>` in insertion order
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    tracks: Vec<Track>,
}

impl InMemoryCatalog {
    /// Create a catalog from `tracks`
    ///
    /// Fails if two tracks share an id.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(CoreError::DuplicateTrackId(track.id));
            }
        }
        Ok(Self { tracks })
    }

    /// The classical collection shipped with Finetune
    pub fn classical() -> Self {
        Self {
            tracks: classical_tracks(),
        }
    }

    /// Synchronous filtered listing
    pub fn query(&self, query: &TrackQuery) -> Vec<Track> {
        query.filter(&self.tracks)
    }

    /// Look up a track by id
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::classical()
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list(&self, query: &TrackQuery) -> Result<Vec<Track>> {
        let tracks = self.query(query);
        tracing::debug!(
            genre = %query.genre,
            search = %query.search,
            count = tracks.len(),
            "Listed catalog tracks"
        );
        Ok(tracks)
    }

    async fn notify_play(&self, track_id: TrackId) -> Result<Acknowledgement> {
        tracing::info!(known = self.get(track_id).is_some(), "Playing track {}", track_id);
        Ok(Acknowledgement::OK)
    }

    async fn find(&self, track_id: TrackId) -> Result<Option<Track>> {
        Ok(self.get(track_id).cloned())
    }
}

#[allow(clippy::too_many_arguments)]
fn track(
    id: u32,
    title: &str,
    composer: &str,
    duration: &str,
    color: &str,
    genre: Genre,
    year: u16,
    popularity: u8,
    album: &str,
    description: &str,
) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        composer: composer.to_string(),
        duration: duration.to_string(),
        color: color.to_string(),
        genre,
        year,
        popularity,
        audio_url: DEMO_AUDIO_URL.to_string(),
        album: album.to_string(),
        description: description.to_string(),
    }
}

fn classical_tracks() -> Vec<Track> {
    vec![
        track(
            1,
            "Symphony No. 9 in D minor, Op. 125 'Choral'",
            "Ludwig van Beethoven",
            "4:32",
            "from-blue-400 to-purple-500",
            Genre::Symphony,
            1824,
            95,
            "Beethoven: Complete Symphonies",
            "Beethoven's final complete symphony, featuring the famous 'Ode to Joy'",
        ),
        track(
            2,
            "Canon in D Major",
            "Johann Pachelbel",
            "3:45",
            "from-pink-400 to-red-500",
            Genre::Baroque,
            1680,
            88,
            "Baroque Masterworks",
            "One of the most famous pieces of classical music",
        ),
        track(
            3,
            "Clair de Lune",
            "Claude Debussy",
            "5:12",
            "from-green-400 to-blue-500",
            Genre::Impressionist,
            1905,
            92,
            "Suite Bergamasque",
            "A dreamy, atmospheric piano piece meaning 'moonlight'",
        ),
        track(
            4,
            "Ave Maria",
            "Franz Schubert",
            "4:18",
            "from-purple-400 to-pink-500",
            Genre::Sacred,
            1825,
            85,
            "Sacred Classical Collection",
            "A beautiful sacred song based on a poem by Walter Scott",
        ),
        track(
            5,
            "The Four Seasons: Spring",
            "Antonio Vivaldi",
            "6:23",
            "from-orange-400 to-red-500",
            Genre::Concerto,
            1725,
            90,
            "The Four Seasons",
            "A violin concerto depicting the sounds and feelings of spring",
        ),
        track(
            6,
            "Piano Sonata No. 14 'Moonlight'",
            "Ludwig van Beethoven",
            "5:45",
            "from-indigo-400 to-purple-500",
            Genre::Sonata,
            1801,
            94,
            "Beethoven: Piano Sonatas",
            "One of Beethoven's most popular piano sonatas",
        ),
        track(
            7,
            "Für Elise",
            "Ludwig van Beethoven",
            "3:30",
            "from-cyan-400 to-blue-500",
            Genre::Bagatelle,
            1810,
            87,
            "Beethoven: Piano Works",
            "A charming piano piece dedicated to Elise",
        ),
        track(
            8,
            "Swan Lake Suite",
            "Pyotr Ilyich Tchaikovsky",
            "7:15",
            "from-emerald-400 to-teal-500",
            Genre::Ballet,
            1876,
            89,
            "Tchaikovsky: Ballet Suites",
            "Music from the famous ballet about a princess turned into a swan",
        ),
    ]
}
