//! # Core Application Logic
//!
//! Validation, the analysis lifecycle and label presentation rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (coordinator)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • form (validation)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  analysis  │
//!           │  Adapter   │              │  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, the single owner of the current analysis
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`form`]: Reflection validation and the inline field message
//! - [`emotion`]: Known labels and their glyphs
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod emotion;
pub mod form;
pub mod state;
