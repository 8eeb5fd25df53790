//! Track list navigation
//!
//! Index selection for next/previous over a caller-supplied list. Shuffle picks
//! uniformly at random and may pick the current track again.

use rand::Rng;

/// Index after `current`, wrapping to the start
///
/// When the current track is not in the list, navigation starts at the first
/// entry. Returns `None` for an empty list.
pub fn next_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) => (index + 1) % len,
        None => 0,
    })
}

/// Index before `current`, wrapping to the end
///
/// When the current track is not in the list, navigation starts at the last
/// entry. Returns `None` for an empty list.
pub fn previous_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) => (index % len + len - 1) % len,
        None => len - 1,
    })
}

/// Uniformly random index, independent of the current position
pub fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}
