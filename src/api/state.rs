use std::sync::Arc;

use crate::config::Config;
use crate::services::{CsvWardrobe, WardrobeSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read on every request; never cached or mutated here
    pub wardrobe: Arc<dyn WardrobeSource>,
}

impl AppState {
    /// Creates state backed by the given wardrobe source
    pub fn new(wardrobe: Arc<dyn WardrobeSource>) -> Self {
        Self { wardrobe }
    }

    /// Creates state reading the CSV file named in the configuration
    pub fn from_config(config: &Config) -> Self {
        let source = CsvWardrobe::new(config.wardrobe_path.clone(), config.formality_policy());
        Self::new(Arc::new(source))
    }
}
