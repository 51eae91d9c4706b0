use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`. Built per submission and dropped once sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReflectionRequest {
    pub text: String,
}

impl ReflectionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Confidence band used to color the confidence bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// Below 50%
    Low,
    /// 50% through 74%
    Medium,
    /// 75% and above
    High,
}

impl ConfidenceTier {
    pub fn from_percentage(percentage: i64) -> Self {
        if percentage < 50 {
            ConfidenceTier::Low
        } else if percentage < 75 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::High
        }
    }
}

/// Successful analysis returned by the service.
///
/// Only `emotion` and `confidence` are required. The remaining fields are
/// sent by the reference service and shown when present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmotionResult {
    pub emotion: String,
    pub confidence: f64,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    /// Unix timestamp (seconds, fractional) of when the service answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<f64>,
}

impl EmotionResult {
    pub fn new(emotion: impl Into<String>, confidence: f64) -> Self {
        Self {
            emotion: emotion.into(),
            confidence,
            suggestions: Vec::new(),
            text_length: None,
            processed_at: None,
        }
    }

    /// `round(confidence * 100)`. Not clamped: a confidence of 1.2 reads as 120.
    pub fn percentage(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_percentage(self.percentage())
    }

    /// Fill ratio for the confidence bar, clamped to `[0, 1]`.
    pub fn bar_ratio(&self) -> f64 {
        (self.percentage() as f64 / 100.0).clamp(0.0, 1.0)
    }

    pub fn is_confidence_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }

    pub fn processed_at_local(&self) -> Option<DateTime<Local>> {
        let ts = self.processed_at?;
        if !ts.is_finite() || ts < 0.0 {
            return None;
        }
        let secs = ts.trunc() as i64;
        let nanos = (ts.fract() * 1_000_000_000.0) as u32;
        DateTime::from_timestamp(secs, nanos).map(|utc| utc.with_timezone(&Local))
    }
}

/// Body of `GET /` on the analysis service.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ServiceStatus {
    /// Short form for the title bar, e.g. `healthy v1.0.0`.
    pub fn summary(&self) -> String {
        match &self.version {
            Some(version) => format!("{} v{}", self.status, version),
            None => self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_text_only() {
        let req = ReflectionRequest::new("I feel nervous about my interview");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"text":"I feel nervous about my interview"}"#);
    }

    #[test]
    fn test_minimal_result_decodes() {
        let result: EmotionResult =
            serde_json::from_str(r#"{"emotion":"happy","confidence":0.87}"#).unwrap();
        assert_eq!(result.emotion, "happy");
        assert!(result.suggestions.is_empty());
        assert_eq!(result.text_length, None);
        assert_eq!(result.processed_at, None);
    }

    #[test]
    fn test_full_service_result_decodes() {
        let body = r#"{
            "emotion": "anxious",
            "confidence": 0.85,
            "suggestions": ["Try deep breathing exercises"],
            "text_length": 43,
            "processed_at": 1700000000.25
        }"#;
        let result: EmotionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.suggestions, vec!["Try deep breathing exercises"]);
        assert_eq!(result.text_length, Some(43));
        assert!(result.processed_at_local().is_some());
    }

    #[test]
    fn test_missing_confidence_fails() {
        let decoded = serde_json::from_str::<EmotionResult>(r#"{"emotion":"happy"}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_percentage_and_tiers() {
        let high = EmotionResult::new("happy", 0.87);
        assert_eq!(high.percentage(), 87);
        assert_eq!(high.tier(), ConfidenceTier::High);

        let low = EmotionResult::new("sad", 0.42);
        assert_eq!(low.percentage(), 42);
        assert_eq!(low.tier(), ConfidenceTier::Low);

        let mid = EmotionResult::new("calm", 0.60);
        assert_eq!(mid.percentage(), 60);
        assert_eq!(mid.tier(), ConfidenceTier::Medium);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_percentage(49), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_percentage(50), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percentage(74), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percentage(75), ConfidenceTier::High);
    }

    #[test]
    fn test_out_of_range_confidence_is_not_clamped_for_display() {
        let over = EmotionResult::new("excited", 1.2);
        assert_eq!(over.percentage(), 120);
        assert_eq!(over.bar_ratio(), 1.0);
        assert!(!over.is_confidence_in_range());

        let under = EmotionResult::new("sad", -0.3);
        assert_eq!(under.percentage(), -30);
        assert_eq!(under.bar_ratio(), 0.0);
        assert_eq!(under.tier(), ConfidenceTier::Low);
    }

    #[test]
    fn test_service_status_summary() {
        let status = ServiceStatus {
            status: "healthy".to_string(),
            message: None,
            version: Some("1.0.0".to_string()),
        };
        assert_eq!(status.summary(), "healthy v1.0.0");
    }
}
