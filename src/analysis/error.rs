use thiserror::Error;

/// Message shown for every failure past local validation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze emotion. Please try again.";

/// Local, pre-flight rejection of a reflection. No request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your reflection")]
    Empty,
    #[error("Please write at least {min} characters")]
    TooShort { min: usize, actual: usize },
}

/// Everything that can go wrong between pressing submit and holding a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Connection failure, timeout, or any non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// 2xx response whose body is not a valid result.
    #[error("decode error: {0}")]
    Decode(String),
}

impl AnalysisError {
    /// Text for the inline field message. Only validation failures are specific.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation(e) => e.to_string(),
            AnalysisError::Transport(_) | AnalysisError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AnalysisError::Decode(e.to_string())
        } else {
            AnalysisError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter your reflection");
        assert_eq!(
            ValidationError::TooShort { min: 10, actual: 3 }.to_string(),
            "Please write at least 10 characters"
        );
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = AnalysisError::Transport("HTTP 500 Internal Server Error".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_user_message_hides_decode_detail() {
        let err = AnalysisError::Decode("missing field `confidence`".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_converts_and_keeps_message() {
        let err: AnalysisError = ValidationError::Empty.into();
        assert_eq!(err.user_message(), "Please enter your reflection");
    }
}
