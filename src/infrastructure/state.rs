//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::domain::PartitionLoader;
use crate::services::CutterService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Cutter lookups, owning the partition cache
    pub cutter: Arc<CutterService>,
}

impl AppState {
    pub fn new(loader: Arc<dyn PartitionLoader>) -> Self {
        Self {
            cutter: Arc::new(CutterService::new(loader)),
        }
    }
}

// Allow handlers to extract the service directly
impl axum::extract::FromRef<AppState> for Arc<CutterService> {
    fn from_ref(state: &AppState) -> Self {
        state.cutter.clone()
    }
}
