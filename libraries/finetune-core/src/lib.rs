//! Finetune Core
//!
//! Platform-agnostic core types, traits, and error handling for Finetune.
//!
//! This crate provides the building blocks shared by the playback controller,
//! the HTTP client and the catalog server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Genre`, `GenreFilter`, `TrackQuery`
//! - **Core Traits**: `CatalogService` (list + advisory play notification)
//! - **Catalog**: `InMemoryCatalog`, seeded with the classical collection
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use finetune_core::{CatalogService, InMemoryCatalog, TrackQuery};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> finetune_core::Result<()> {
//! let catalog = InMemoryCatalog::classical();
//!
//! let query = TrackQuery::new(Some("Symphony"), None);
//! let tracks = catalog.list(&query).await?;
//! assert_eq!(tracks.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::InMemoryCatalog;
pub use error::{CoreError, Result};
pub use traits::CatalogService;

pub use types::{
    Acknowledgement, Genre, GenreFilter, PlayAction, PlayNotification, PlayReport, Track, TrackId, TrackQuery,
};
