/// Shared application state
use finetune_core::CatalogService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }
}
