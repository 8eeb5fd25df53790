//! Finetune Catalog Client
//!
//! HTTP client and view state for a player talking to a Finetune catalog server.
//!
//! # Features
//!
//! - **Listing**: Fetch tracks filtered by genre and search text
//! - **Play reporting**: Advisory play notifications
//! - **View state**: Out-of-order responses never overwrite a newer list
//!
//! # Example
//!
//! ```ignore
//! use finetune_client::{CatalogClient, CatalogView, ClientConfig};
//! use finetune_core::TrackQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     let mut view = CatalogView::new();
//!     view.refresh(&client, TrackQuery::new(Some("Sonata"), None)).await;
//!     println!("Showing {} tracks", view.tracks().len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod view;

pub use client::CatalogClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use view::{ApplyOutcome, CatalogView, RequestTicket};
