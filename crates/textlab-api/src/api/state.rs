//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnalysisService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service; neither is mutated after startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Analysis Service
  ///
  /// - Production: `Arc::new(PlaceholderAnalysisService::new())`
  /// - Test: `Arc::new(StubAnalysisService)`
  pub service: Arc<dyn AnalysisService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnalysisService>) -> Self {
    Self { config, service }
  }
}
