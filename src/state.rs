// src/state.rs
use std::sync::Arc;

use crate::services::assistant::Assistant;
use crate::services::inference::InferenceService;

pub type SharedState = Arc<AppState>;

/// Read-only after startup; shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub assistant: Assistant,
}

impl AppState {
    pub fn new(backend: Arc<dyn InferenceService>) -> Self {
        Self {
            assistant: Assistant::new(backend),
        }
    }
}
