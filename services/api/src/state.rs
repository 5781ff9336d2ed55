//! Application state shared across handlers

use estate::storage::MemStorage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: MemStorage,
}
