//! Genre types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted in place of a genre meaning "no genre filter"
pub const ALL_GENRES: &str = "All";

/// A catalog genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Symphony,
    Baroque,
    Impressionist,
    Sacred,
    Concerto,
    Sonata,
    Bagatelle,
    Ballet,
}

impl Genre {
    /// Every genre, in display order
    pub const ALL: [Genre; 8] = [
        Genre::Symphony,
        Genre::Baroque,
        Genre::Impressionist,
        Genre::Sacred,
        Genre::Concerto,
        Genre::Sonata,
        Genre::Bagatelle,
        Genre::Ballet,
    ];

    /// Wire/display name
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Symphony => "Symphony",
            Genre::Baroque => "Baroque",
            Genre::Impressionist => "Impressionist",
            Genre::Sacred => "Sacred",
            Genre::Concerto => "Concerto",
            Genre::Sonata => "Sonata",
            Genre::Bagatelle => "Bagatelle",
            Genre::Ballet => "Ballet",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl fmt::Display for UnknownGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown genre: {}", self.0)
    }
}

impl std::error::Error for UnknownGenre {}

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Exact, case-sensitive match on the genre name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Genre restriction applied by a catalog query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GenreFilter {
    /// No genre restriction
    #[default]
    All,

    /// Only tracks of exactly this genre
    Only(Genre),

    /// A genre name no track carries; admits nothing
    Unknown(String),
}

impl GenreFilter {
    /// Parse a raw filter value
    ///
    /// Absent, empty and `"All"` mean no filter. Any other value must name a
    /// genre exactly; unrecognized names match no track.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => GenreFilter::All,
            Some(value) if value.is_empty() || value == ALL_GENRES => GenreFilter::All,
            Some(value) => match value.parse::<Genre>() {
                Ok(genre) => GenreFilter::Only(genre),
                Err(err) => {
                    tracing::debug!(%err, "Unrecognized genre filter matches nothing");
                    GenreFilter::Unknown(err.0)
                }
            },
        }
    }

    /// Whether a track of `genre` passes this filter
    pub fn admits(&self, genre: Genre) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(wanted) => *wanted == genre,
            GenreFilter::Unknown(_) => false,
        }
    }

    /// Query-string value, `None` when no filter is applied
    ///
    /// Unknown names are passed through so a remote catalog answers them the
    /// same way.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            GenreFilter::All => None,
            GenreFilter::Only(genre) => Some(genre.as_str()),
            GenreFilter::Unknown(name) => Some(name),
        }
    }
}

impl From<Genre> for GenreFilter {
    fn from(genre: Genre) -> Self {
        GenreFilter::Only(genre)
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str(ALL_GENRES),
            GenreFilter::Only(genre) => genre.fmt(f),
            GenreFilter::Unknown(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_round_trips_through_name() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn genre_match_is_case_sensitive() {
        assert!("symphony".parse::<Genre>().is_err());
    }

    #[test]
    fn filter_sentinels_disable_filtering() {
        assert_eq!(GenreFilter::parse(None), GenreFilter::All);
        assert_eq!(GenreFilter::parse(Some("")), GenreFilter::All);
        assert_eq!(GenreFilter::parse(Some("All")), GenreFilter::All);
    }

    #[test]
    fn unrecognized_filter_admits_nothing() {
        let polka = GenreFilter::parse(Some("Polka"));
        assert_eq!(polka, GenreFilter::Unknown("Polka".to_string()));
        assert!(Genre::ALL.into_iter().all(|genre| !polka.admits(genre)));

        // Case matters
        let shouted = GenreFilter::parse(Some("BAROQUE"));
        assert!(!shouted.admits(Genre::Baroque));
        assert_eq!(shouted.as_param(), Some("BAROQUE"));
    }

    #[test]
    fn known_genre_restricts() {
        let filter = GenreFilter::parse(Some("Ballet"));
        assert_eq!(filter, GenreFilter::Only(Genre::Ballet));
        assert!(filter.admits(Genre::Ballet));
        assert!(!filter.admits(Genre::Sonata));
        assert_eq!(filter.as_param(), Some("Ballet"));
        assert_eq!(GenreFilter::All.as_param(), None);
    }

    #[test]
    fn genre_serializes_as_name() {
        let json = serde_json::to_string(&Genre::Impressionist).unwrap();
        assert_eq!(json, "\"Impressionist\"");
    }
}
