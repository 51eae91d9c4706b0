//! # TitleBar Component
//!
//! Top status bar: application name, the service being talked to, and the
//! current status text (health check result, "Analyzing...", last label).
//!
//! Purely presentational. All three fields are props:
//! - `base_url`: from `App` (resolved configuration)
//! - `status_message`: from `App`, written by `update()`
//! - `is_loading`: from `App::is_loading()`, dims nothing but adds a marker
//!
//! ## Conditional Formatting
//!
//! 1. **Status present**: `"Emotion Reflection (http://localhost:5000) | Analyzing..."`
//! 2. **No status**: `"Emotion Reflection (http://localhost:5000)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub base_url: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String, is_loading: bool) -> Self {
        Self {
            base_url,
            status_message,
            is_loading,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Emotion Reflection ({})", self.base_url)
        } else {
            format!("Emotion Reflection ({}) | {}", self.base_url, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_loading {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Line::from(Span::styled(self.title_text(), style)), area);
    }
}
