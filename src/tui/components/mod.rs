//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status bar with service URL and status
//! - `ResultView`: Idle / loading / result pane
//! - `Spinner`: Animated activity indicator
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ReflectionForm`: Text area, counter, field message and submit button
//!
//! Components receive external data as props rather than reading `App`
//! directly, so each one can be rendered in isolation against a
//! `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── result_view.rs      (Analysis pane + presentation tables)
//! ├── spinner.rs          (Braille spinner)
//! └── reflection_form/    (Form pane + multi-line text area)
//! ```

pub mod reflection_form;
pub mod result_view;
pub mod spinner;
mod title_bar;

pub use reflection_form::{FormEvent, ReflectionForm};
pub use result_view::{ResultState, ResultView};
pub use title_bar::TitleBar;
