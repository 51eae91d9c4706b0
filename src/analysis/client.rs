//! HTTP client for the emotion analysis service.
//!
//! One `POST {base_url}/analyze` per submission. No retry, no timeout,
//! no cancellation: a superseded call simply runs to completion and its
//! outcome is discarded by the coordinator.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::error::AnalysisError;
use super::types::{EmotionResult, ReflectionRequest, ServiceStatus};

#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Base URL requests are sent to, for display.
    fn base_url(&self) -> &str;

    /// Submits a reflection and returns the classified emotion.
    async fn analyze(&self, request: &ReflectionRequest) -> Result<EmotionResult, AnalysisError>;

    /// Queries the service's health endpoint.
    async fn health(&self) -> Result<ServiceStatus, AnalysisError>;
}

pub struct HttpAnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn analyze(&self, request: &ReflectionRequest) -> Result<EmotionResult, AnalysisError> {
        info!(
            "Analysis request: url={}/analyze, text_chars={}",
            self.base_url,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Analysis request failed to send: {}", e);
                AnalysisError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!("Analysis response status: {}", status);

        if !status.is_success() {
            warn!("Analysis service returned HTTP {}", status.as_u16());
            return Err(AnalysisError::Transport(format!("HTTP {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read analysis response body: {}", e);
            AnalysisError::Transport(e.to_string())
        })?;

        let result: EmotionResult = serde_json::from_slice(&body).map_err(|e| {
            warn!(
                "Malformed analysis response ({}): {}",
                e,
                String::from_utf8_lossy(&body)
            );
            AnalysisError::Decode(e.to_string())
        })?;

        if !result.is_confidence_in_range() {
            warn!(
                "Confidence {} for '{}' is outside [0, 1]; displaying as-is",
                result.confidence, result.emotion
            );
        }

        info!(
            "Analysis complete: emotion={}, confidence={}",
            result.emotion, result.confidence
        );
        Ok(result)
    }

    async fn health(&self) -> Result<ServiceStatus, AnalysisError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Transport(format!("HTTP {}", status)));
        }

        let service: ServiceStatus = response.json().await?;
        debug!("Service status: {:?}", service);
        Ok(service)
    }
}
