use std::sync::Arc;

use crate::{config::AppConfig, dao::player_store::PlayerStore};

/// State handle shared by every handler.
pub type SharedState = Arc<AppState>;

/// Central application state: the player store and the runtime configuration.
pub struct AppState {
    store: Arc<dyn PlayerStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn PlayerStore>, config: AppConfig) -> SharedState {
        Arc::new(Self { store, config })
    }

    /// Handle to the installed player store.
    pub fn store(&self) -> Arc<dyn PlayerStore> {
        Arc::clone(&self.store)
    }

    /// Configuration the server started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
