use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::PreferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The preference store — single source of truth for wizard fields and
    /// the active roadmap. All store mutations are synchronous; the lock only
    /// serializes handler access. The storage port is injected into the store
    /// at construction.
    pub store: Arc<RwLock<PreferenceStore>>,
}
