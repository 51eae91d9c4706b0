//! # Spinner Component
//!
//! Braille-dot spinner shown on the submit button and in the loading pane.
//! The frame index is a prop derived from elapsed time by the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph for the given animation tick. Wraps around.
pub fn frame_glyph(frame_index: usize) -> &'static str {
    FRAMES[frame_index % FRAMES.len()]
}

pub struct Spinner<'a> {
    pub frame_index: usize,
    pub label: &'a str,
    pub style: Style,
}

impl<'a> Spinner<'a> {
    pub fn new(frame_index: usize, label: &'a str) -> Self {
        Self {
            frame_index,
            label,
            style: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        }
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(frame_glyph(self.frame_index), self.style),
            Span::raw(" "),
            Span::styled(self.label, self.style),
        ])
    }
}

impl Component for Spinner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
