//! Core domain types for Finetune

mod genre;
mod ids;
mod notify;
mod query;
mod track;

pub use genre::{Genre, GenreFilter};
pub use ids::TrackId;
pub use notify::{Acknowledgement, PlayAction, PlayNotification, PlayReport};
pub use query::TrackQuery;
pub use track::Track;
