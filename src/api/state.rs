//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::api::view::GoalsView;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::MetricsRegistry;
use crate::store::GoalStore;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
    pub store: Arc<dyn GoalStore>,
    pub view: GoalsView,
}

impl AppState {
    /// Builds the state and loads the list template from the data path
    pub fn new(config: Config, metrics: MetricsRegistry, store: Arc<dyn GoalStore>) -> Result<Self> {
        let view = GoalsView::load(config.data_path.as_deref())?;
        Ok(Self {
            config,
            metrics,
            store,
            view,
        })
    }
}
