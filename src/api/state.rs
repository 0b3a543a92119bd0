//! Application state for the HTTP API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded region configuration and the entry store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded region configuration.
    config: Arc<ConfigLoader>,
    /// The entry and roster store.
    store: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: MemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the entry store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
