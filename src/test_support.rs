//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::analysis::{
    AnalysisClient, AnalysisError, EmotionResult, ReflectionRequest, ServiceStatus,
};

/// A client that answers every call with a fixed outcome and records the
/// requests it saw.
pub struct StubClient {
    outcome: Result<EmotionResult, AnalysisError>,
    pub seen: Mutex<Vec<ReflectionRequest>>,
}

impl StubClient {
    pub fn answering(outcome: Result<EmotionResult, AnalysisError>) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AnalysisClient for StubClient {
    fn base_url(&self) -> &str {
        "http://stub"
    }

    async fn analyze(&self, request: &ReflectionRequest) -> Result<EmotionResult, AnalysisError> {
        self.seen.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }

    async fn health(&self) -> Result<ServiceStatus, AnalysisError> {
        Ok(ServiceStatus {
            status: "healthy".to_string(),
            message: None,
            version: Some("test".to_string()),
        })
    }
}

/// Creates a test App pointed at the stub URL.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("http://stub".to_string())
}
