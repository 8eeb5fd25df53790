//! Finetune Server Library
//!
//! Catalog query server: filtered track listings and advisory play
//! notifications over HTTP.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::{CatalogSettings, ServerConfig, ServerSettings};
pub use error::{Result, ServerError};
pub use state::AppState;
