//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (analysis in flight): draws every ~80ms so the spinners move.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or an
//!   action arriving from a background task.
//!
//! ## Background work
//!
//! Network calls run on tokio tasks and report back as `Action`s over a
//! `std::sync::mpsc` channel drained once per loop iteration. Tasks are
//! never aborted; a superseded analysis is discarded by `update()` using
//! its generation number.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::analysis::{AnalysisClient, HttpAnalysisClient, ReflectionRequest};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, ReflectionForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: ReflectionForm,
    /// Animation tick shared by both spinners
    pub spinner_frame: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: ReflectionForm::new(),
            spinner_frame: 0,
        }
    }

    /// Copy the props the form needs from core state.
    pub fn sync(&mut self, app: &App) {
        self.form.is_loading = app.is_loading();
        self.form.error = app.form.error.clone();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol allows Shift+Enter detection; terminals
        // without it ignore the sequence
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn AnalysisClient> = Arc::new(HttpAnalysisClient::new(config.base_url));
    let mut app = App::new(client.base_url().to_string());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_health_check(client.clone(), tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let outcome = loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.sync(&app);
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            tui.form.spinner_frame = tui.spinner_frame;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    should_quit = update(&mut app, Action::Quit) == Effect::Quit;
                }
                event => {
                    let Some(form_event) = tui.form.handle_event(&event) else {
                        continue;
                    };
                    let action = match form_event {
                        FormEvent::Submit(text) => Action::Submit(text),
                        FormEvent::Clear => Action::Clear,
                        FormEvent::ContentChanged => continue,
                    };
                    apply(&mut app, action, &client, &tx);
                    // Keep props current for events drained in this batch
                    tui.sync(&app);
                }
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, action, &client, &tx);
        }
    };

    ratatui::restore();
    info!("Shutting down");
    outcome
}

/// Run `update()` and carry out the effect it asks for.
fn apply(
    app: &mut App,
    action: Action,
    client: &Arc<dyn AnalysisClient>,
    tx: &mpsc::Sender<Action>,
) {
    match update(app, action) {
        Effect::SpawnAnalysis {
            generation,
            request,
        } => spawn_analysis(client.clone(), generation, request, tx.clone()),
        Effect::None | Effect::Quit => {}
    }
}

/// Performs one analysis call and packages the outcome as an action.
async fn run_analysis(
    client: &dyn AnalysisClient,
    generation: u64,
    request: ReflectionRequest,
) -> Action {
    let outcome = client.analyze(&request).await;
    if let Err(e) = &outcome {
        info!("Analysis {} failed: {}", generation, e);
    }
    Action::AnalysisFinished {
        generation,
        outcome,
    }
}

fn spawn_analysis(
    client: Arc<dyn AnalysisClient>,
    generation: u64,
    request: ReflectionRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning analysis request (generation {})", generation);
    tokio::spawn(async move {
        let action = run_analysis(client.as_ref(), generation, request).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver analysis {}: receiver dropped", generation);
        }
    });
}

fn spawn_health_check(client: Arc<dyn AnalysisClient>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let outcome = client.health().await;
        if tx.send(Action::ServiceChecked(outcome)).is_err() {
            warn!("Failed to deliver health check: receiver dropped");
        }
    });
}
