/// ID types for Finetune entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Track identifier
///
/// Stable for the lifetime of the catalog. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(u32);

impl TrackId {
    /// Create a new track ID
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for TrackId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&TrackId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: TrackId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn parses_from_path_segment() {
        assert_eq!("3".parse::<TrackId>().unwrap(), TrackId::new(3));
        assert!("three".parse::<TrackId>().is_err());
    }
}
