//! # Application State
//!
//! Core state for the reflection client. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── analysis: AnalysisState        // Idle | Loading | Ready | Failed
//! ├── generation: u64                // id of the latest submission
//! ├── form: FormController           // inline field message
//! ├── status_message: String         // title bar text
//! ├── service: Option<ServiceStatus> // last health check
//! └── base_url: String               // where requests go
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::analysis::{AnalysisError, EmotionResult, ServiceStatus};
use crate::core::form::FormController;

/// Lifecycle of the single "current analysis". At most one result is held.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting on the submission tagged `generation`.
    Loading { generation: u64 },
    Ready(EmotionResult),
    Failed(AnalysisError),
}

pub struct App {
    pub analysis: AnalysisState,
    /// Incremented on every accepted submission. Only the response carrying
    /// the current value may commit.
    pub generation: u64,
    pub form: FormController,
    pub status_message: String,
    pub service: Option<ServiceStatus>,
    pub base_url: String,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            analysis: AnalysisState::Idle,
            generation: 0,
            form: FormController::new(),
            status_message: String::from("Checking service..."),
            service: None,
            base_url,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.analysis, AnalysisState::Loading { .. })
    }

    pub fn result(&self) -> Option<&EmotionResult> {
        match &self.analysis {
            AnalysisState::Ready(result) => Some(result),
            _ => None,
        }
    }
}
