pub mod client;
pub mod config;
pub mod model;
pub mod web;

use model::LocalModel;

// Shared, read-only state handed to every worker
pub struct AppState {
    pub model: LocalModel,
}

impl AppState {
    pub fn new(model: LocalModel) -> Self {
        Self { model }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LocalModel::default())
    }
}
