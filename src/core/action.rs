//! # Actions
//!
//! Everything that can happen becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The service answers? That's `Action::AnalysisFinished { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the caller should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Submission generations
//!
//! Each accepted submission bumps `App::generation` and the spawned request
//! carries that number back. A response whose generation is stale is
//! dropped, so the last submission wins regardless of which call resolves
//! last.

use log::{debug, info, warn};

use crate::analysis::{AnalysisError, EmotionResult, ReflectionRequest, ServiceStatus};
use crate::core::state::{AnalysisState, App};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Submit the current text area contents.
    Submit(String),
    /// Clear the form (text and field message). In-flight requests continue.
    Clear,
    /// A spawned analysis resolved.
    AnalysisFinished {
        generation: u64,
        outcome: Result<EmotionResult, AnalysisError>,
    },
    /// Startup health check resolved.
    ServiceChecked(Result<ServiceStatus, AnalysisError>),
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnAnalysis {
        generation: u64,
        request: ReflectionRequest,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if app.is_loading() {
                debug!("Submit ignored: analysis already in flight");
                return Effect::None;
            }

            let Some(request) = app.form.submit(&text) else {
                return Effect::None;
            };

            app.generation += 1;
            app.analysis = AnalysisState::Loading {
                generation: app.generation,
            };
            app.status_message = String::from("Analyzing...");
            info!(
                "Submission {} accepted ({} chars)",
                app.generation,
                request.text.chars().count()
            );

            Effect::SpawnAnalysis {
                generation: app.generation,
                request,
            }
        }

        Action::Clear => {
            app.form.clear();
            Effect::None
        }

        Action::AnalysisFinished {
            generation,
            outcome,
        } => {
            let current = matches!(
                app.analysis,
                AnalysisState::Loading { generation: g } if g == generation
            );
            if !current {
                debug!(
                    "Discarding stale analysis outcome (generation {}, current {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            match outcome {
                Ok(result) => {
                    app.form.complete();
                    app.status_message = format!("Detected: {}", result.emotion);
                    app.analysis = AnalysisState::Ready(result);
                }
                Err(e) => {
                    app.form.fail(&e);
                    app.status_message = String::from("Analysis failed");
                    app.analysis = AnalysisState::Failed(e);
                }
            }
            Effect::None
        }

        Action::ServiceChecked(outcome) => {
            match outcome {
                Ok(status) => {
                    app.status_message = format!("Service {}", status.summary());
                    app.service = Some(status);
                }
                Err(e) => {
                    warn!("Health check against {} failed: {}", app.base_url, e);
                    app.status_message = String::from("Service unreachable");
                    app.service = None;
                }
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
