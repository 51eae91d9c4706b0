//! # Form Controller
//!
//! Validates a reflection before anything touches the network and owns the
//! inline field message. The text itself lives in the input widget; this
//! module only sees it at submit time.
//!
//! ```text
//! submit(text) ──► validate ──✗──► error = "Please ..."     (no request)
//!                     │
//!                     ✓
//!                     ▼
//!              error cleared, ReflectionRequest handed to the coordinator
//! ```

use log::{debug, warn};

use crate::analysis::{AnalysisError, ReflectionRequest, ValidationError};

/// Minimum reflection length, in characters.
pub const MIN_REFLECTION_CHARS: usize = 10;
/// Length shown in the counter. Informational only, not enforced.
pub const DISPLAY_LIMIT_CHARS: usize = 500;

/// Checks a raw reflection. The request carries the text untrimmed.
pub fn validate_reflection(text: &str) -> Result<ReflectionRequest, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let actual = text.chars().count();
    if actual < MIN_REFLECTION_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_REFLECTION_CHARS,
            actual,
        });
    }

    Ok(ReflectionRequest::new(text))
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormController {
    /// Inline message under the text area.
    pub error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `text`. On success the previous error is cleared and the
    /// request is returned; on failure the field message is set.
    pub fn submit(&mut self, text: &str) -> Option<ReflectionRequest> {
        match validate_reflection(text) {
            Ok(request) => {
                self.error = None;
                Some(request)
            }
            Err(e) => {
                debug!("Reflection rejected locally: {:?}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Records a failed analysis. The cause goes to the log, the user sees
    /// the generic message.
    pub fn fail(&mut self, error: &AnalysisError) {
        warn!("Analysis error: {}", error);
        self.error = Some(error.user_message());
    }

    pub fn complete(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(validate_reflection(""), Err(ValidationError::Empty));
        assert_eq!(validate_reflection("   \n\t  "), Err(ValidationError::Empty));
        // Whitespace-only but long enough is still empty
        assert_eq!(
            validate_reflection("                    "),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn test_short_input_rejected_for_every_length_below_minimum() {
        for len in 1..MIN_REFLECTION_CHARS {
            let text = "a".repeat(len);
            assert_eq!(
                validate_reflection(&text),
                Err(ValidationError::TooShort {
                    min: MIN_REFLECTION_CHARS,
                    actual: len
                }),
                "length {len} should be rejected"
            );
        }
    }

    #[test]
    fn test_minimum_length_accepted() {
        let text = "a".repeat(MIN_REFLECTION_CHARS);
        assert_eq!(validate_reflection(&text), Ok(ReflectionRequest::new(text)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 9 chars, 18+ bytes
        assert!(matches!(
            validate_reflection("ééééééééé"),
            Err(ValidationError::TooShort { actual: 9, .. })
        ));
    }

    #[test]
    fn test_request_keeps_raw_untrimmed_text() {
        let request = validate_reflection("  I feel nervous today  ").unwrap();
        assert_eq!(request.text, "  I feel nervous today  ");
    }

    #[test]
    fn test_submit_sets_and_clears_error() {
        let mut form = FormController::new();

        assert!(form.submit("").is_none());
        assert_eq!(form.error.as_deref(), Some("Please enter your reflection"));

        assert!(form.submit("short").is_none());
        assert_eq!(
            form.error.as_deref(),
            Some("Please write at least 10 characters")
        );

        assert!(form.submit("I feel nervous about my first job interview").is_some());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_fail_shows_generic_message() {
        let mut form = FormController::new();
        form.fail(&AnalysisError::Transport("connection refused".to_string()));
        assert_eq!(form.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));

        form.complete();
        assert!(form.error.is_none());
    }

    #[test]
    fn test_clear_resets_error() {
        let mut form = FormController::new();
        form.submit("");
        form.clear();
        assert!(form.error.is_none());
    }
}
