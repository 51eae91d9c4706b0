pub mod client;
pub mod error;
pub mod types;

pub use client::{AnalysisClient, HttpAnalysisClient};
pub use error::{AnalysisError, GENERIC_FAILURE_MESSAGE, ValidationError};
pub use types::{ConfidenceTier, EmotionResult, ReflectionRequest, ServiceStatus};
