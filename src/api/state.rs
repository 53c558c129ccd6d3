use std::sync::Arc;

use crate::services::RecommendationPipeline;

/// Shared application state.
///
/// Everything behind it is loaded once at startup and never mutated, so no
/// lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RecommendationPipeline>,
}

impl AppState {
    pub fn new(pipeline: RecommendationPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
