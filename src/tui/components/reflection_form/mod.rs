//! # ReflectionForm Component
//!
//! The left-hand pane: where the user writes a reflection and submits it.
//!
//! ## Responsibilities
//!
//! - Capture and edit text (typing, paste, cursor movement, newlines)
//! - Show a `n/500 characters` counter (informational, not enforced)
//! - Show the inline field message passed down from the form controller
//! - Emit `Submit(text)` on Enter and `Clear` on Ctrl+L
//!
//! ## State Management
//!
//! The text buffer is internal state. `is_loading`, `error` and
//! `spinner_frame` are props synced from `App` every frame. While loading
//! the text area is read-only and the button shows a spinner; Clear stays
//! available, matching the always-enabled clear control.

mod text_area;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::form::DISPLAY_LIMIT_CHARS;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::spinner::Spinner;
use crate::tui::event::TuiEvent;

pub use text_area::TextArea;

const PLACEHOLDER: &str = "I feel nervous about my first job interview...";
const TEXT_AREA_MIN_ROWS: u16 = 3;
const DEFAULT_WIDTH: u16 = 40;

/// High-level events emitted by the ReflectionForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User pressed Enter with this text
    Submit(String),
    /// User asked to clear the form
    Clear,
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct ReflectionForm {
    /// Text being written (Internal State)
    pub input: TextArea,
    /// Whether an analysis is in flight (Prop)
    pub is_loading: bool,
    /// Inline field message (Prop)
    pub error: Option<String>,
    /// Animation tick for the button spinner (Prop)
    pub spinner_frame: usize,
    /// Text area inner width from the last render, for vertical movement
    last_inner_width: u16,
}

impl Default for ReflectionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectionForm {
    pub fn new() -> Self {
        Self {
            input: TextArea::new(),
            is_loading: false,
            error: None,
            spinner_frame: 0,
            last_inner_width: DEFAULT_WIDTH,
        }
    }

    fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.text().trim().is_empty()
    }

    fn render_text_area(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Indexed(111))
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Your Reflection ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.last_inner_width = inner.width.max(1);
        let is_empty = self.input.is_empty();

        if is_empty {
            let placeholder = Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: false });
            frame.render_widget(placeholder, inner);
        }

        let (lines, (cursor_x, cursor_y)) = self.input.viewport(inner.width, inner.height);
        if !is_empty {
            let text: Vec<Line> = lines.into_iter().map(Line::raw).collect();
            let style = if self.is_loading {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            frame.render_widget(Paragraph::new(text).style(style), inner);
        }

        if !self.is_loading && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + cursor_x, inner.y + cursor_y));
        }
    }

    fn render_counter(&self, frame: &mut Frame, area: Rect) {
        let counter = format!("{}/{} characters", self.input.char_count(), DISPLAY_LIMIT_CHARS);
        let counter_style = if self.input.char_count() > DISPLAY_LIMIT_CHARS {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Indexed(146))
        };
        let hint = "Ctrl+L Clear";
        let [counter_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint.len() as u16)])
                .areas(area);
        frame.render_widget(Paragraph::new(counter).style(counter_style), counter_area);

        if !self.input.is_empty() {
            let hint = Paragraph::new(hint)
                .style(Style::default().fg(Color::Indexed(146)))
                .alignment(Alignment::Right);
            frame.render_widget(hint, hint_area);
        }
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let error = Paragraph::new(message)
            .style(Style::default().fg(Color::LightRed))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(error, area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let (line, style) = if self.is_loading {
            let spinner = Spinner::new(self.spinner_frame, "Analyzing Emotions...");
            (spinner.line(), Style::default().fg(Color::Gray))
        } else if self.can_submit() {
            (
                Line::from(Span::styled(
                    "Analyze Emotion",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Style::default().fg(Color::White).bg(Color::Indexed(57)),
            )
        } else {
            (
                Line::from("Analyze Emotion"),
                Style::default().fg(Color::DarkGray),
            )
        };

        let button = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style));
        frame.render_widget(button, area);
    }
}

impl Component for ReflectionForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Indexed(99)))
            .title(Line::from(" Share Your Thoughts ").centered());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let error_height = if self.error.is_some() { 3 } else { 0 };
        let [subtitle_area, text_area, counter_area, error_area, button_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(TEXT_AREA_MIN_ROWS + 2),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Length(3),
        ])
        .areas(inner);

        let subtitle = Paragraph::new("Express what's on your mind and discover the emotions within")
            .style(Style::default().fg(Color::Indexed(146)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(subtitle, subtitle_area);

        self.render_text_area(frame, text_area);
        self.render_counter(frame, counter_area);
        if let Some(message) = &self.error {
            self.render_error(frame, error_area, message);
        }
        self.render_button(frame, button_area);
    }
}

impl EventHandler for ReflectionForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if let TuiEvent::Clear = event {
            self.input.clear();
            return Some(FormEvent::Clear);
        }

        // Read-only while an analysis is in flight
        if self.is_loading {
            return None;
        }

        let changed = match event {
            TuiEvent::Submit => return Some(FormEvent::Submit(self.input.text().to_string())),
            TuiEvent::InputChar(c) => {
                self.input.insert_char(*c);
                true
            }
            TuiEvent::Paste(text) => {
                self.input.insert_str(text);
                true
            }
            TuiEvent::Backspace => self.input.backspace(),
            TuiEvent::Delete => self.input.delete(),
            TuiEvent::CursorLeft => self.input.move_left(),
            TuiEvent::CursorRight => self.input.move_right(),
            TuiEvent::CursorHome => self.input.move_home(),
            TuiEvent::CursorEnd => self.input.move_end(),
            TuiEvent::CursorUp => self.input.move_vertically(-1, self.last_inner_width),
            TuiEvent::CursorDown => self.input.move_vertically(1, self.last_inner_width),
            _ => false,
        };

        changed.then_some(FormEvent::ContentChanged)
    }
}
