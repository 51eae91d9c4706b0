//! # ResultView Component
//!
//! The right-hand pane. A pure function of one of three states:
//!
//! - **Idle**: nothing analyzed yet (or the last attempt failed; the form
//!   shows that error, not this pane)
//! - **Loading**: a submission is in flight
//! - **Ready**: an `EmotionResult` to present
//!
//! Rendering the same state twice produces the same buffer.
//!
//! ## Presentation tables
//!
//! Label → color is a total mapping over the ten known emotions with a gray
//! fallback; label → glyph lives in `core::emotion`. The confidence bar is
//! colored by tier: red below 50%, yellow for 50–74%, green from 75%.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph, Wrap};

use crate::analysis::{ConfidenceTier, EmotionResult};
use crate::core::emotion::{Emotion, IDLE_GLYPH, glyph_for};
use crate::core::state::AnalysisState;
use crate::tui::component::Component;
use crate::tui::components::spinner::Spinner;

const MUTED: Color = Color::Indexed(146);

/// What the pane shows. Loading wins over any stale result because the
/// coordinator drops the result when it enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultState<'a> {
    Idle,
    Loading,
    Ready(&'a EmotionResult),
}

impl<'a> ResultState<'a> {
    pub fn from_analysis(analysis: &'a AnalysisState) -> Self {
        match analysis {
            AnalysisState::Loading { .. } => ResultState::Loading,
            AnalysisState::Ready(result) => ResultState::Ready(result),
            AnalysisState::Idle | AnalysisState::Failed(_) => ResultState::Idle,
        }
    }
}

pub fn emotion_color(label: &str) -> Color {
    match Emotion::from_label(label) {
        Some(Emotion::Happy) => Color::LightYellow,
        Some(Emotion::Sad) => Color::LightBlue,
        Some(Emotion::Angry) => Color::LightRed,
        Some(Emotion::Anxious) => Color::Indexed(215),
        Some(Emotion::Excited) => Color::LightGreen,
        Some(Emotion::Calm) => Color::Indexed(43),
        Some(Emotion::Confused) => Color::LightMagenta,
        Some(Emotion::Confident) => Color::Indexed(105),
        Some(Emotion::Frustrated) => Color::Indexed(212),
        Some(Emotion::Peaceful) => Color::Indexed(42),
        None => Color::Gray,
    }
}

pub fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::Low => Color::Red,
        ConfidenceTier::Medium => Color::Yellow,
        ConfidenceTier::High => Color::Green,
    }
}

pub struct ResultView<'a> {
    pub state: ResultState<'a>,
    pub spinner_frame: usize,
}

impl<'a> ResultView<'a> {
    pub fn new(state: ResultState<'a>, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
        }
    }

    fn render_idle(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(IDLE_GLYPH),
            Line::default(),
            Line::from(Span::styled(
                "Ready to Analyze",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter your thoughts in the form to discover your emotional state",
                Style::default().fg(MUTED),
            )),
        ];
        render_centered(frame, area, lines);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = Spinner::new(self.spinner_frame, "Analyzing Your Emotions");
        let lines = vec![
            spinner.line(),
            Line::default(),
            Line::from(Span::styled(
                "Please wait while we process your reflection...",
                Style::default().fg(MUTED),
            )),
        ];
        render_centered(frame, area, lines);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, result: &EmotionResult) {
        let percentage = result.percentage();
        let label_color = emotion_color(&result.emotion);
        let bar_color = tier_color(result.tier());

        let [
            subtitle_area,
            label_area,
            caption_area,
            _,
            confidence_area,
            gauge_area,
            _,
            stats_area,
            _,
            summary_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("Here's what we discovered about your emotional state")
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Center),
            subtitle_area,
        );

        let label = Line::from(vec![
            Span::raw(glyph_for(&result.emotion)),
            Span::raw("  "),
            Span::styled(
                result.emotion.clone(),
                Style::default().fg(label_color).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), label_area);
        frame.render_widget(
            Paragraph::new("Primary Emotion Detected")
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Center),
            caption_area,
        );

        let percent_text = format!("{percentage}%");
        let [confidence_label, confidence_value] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(percent_text.len() as u16),
        ])
        .areas(confidence_area);
        frame.render_widget(
            Paragraph::new("Confidence Level").style(Style::default().fg(Color::White)),
            confidence_label,
        );
        frame.render_widget(
            Paragraph::new(percent_text.as_str()).style(Style::default().fg(MUTED)),
            confidence_value,
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(bar_color).bg(Color::Indexed(238)))
            .ratio(result.bar_ratio())
            .label(Span::raw(""));
        frame.render_widget(gauge, gauge_area);

        // The service reports the reflection length; fall back to the label.
        let characters = result
            .text_length
            .unwrap_or_else(|| result.emotion.chars().count());
        let stats = Line::from(vec![
            Span::styled(format!("{percentage}%"), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" Accuracy", Style::default().fg(MUTED)),
            Span::raw("    "),
            Span::styled(characters.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" Characters", Style::default().fg(MUTED)),
        ]);
        frame.render_widget(Paragraph::new(stats).alignment(Alignment::Center), stats_area);

        self.render_summary(frame, summary_area, result, percentage);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, result: &EmotionResult, percentage: i64) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Analysis Summary ");
        let inner_width = usize::from(block.inner(area).width.max(1));

        let mut lines = vec![Line::from(vec![
            Span::raw("Based on your reflection, we detected a primary emotion of "),
            Span::styled(
                result.emotion.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " with {percentage}% confidence. This analysis helps you understand your \
                 current emotional state and can be useful for emotional self-awareness and growth."
            )),
        ])];

        if !result.suggestions.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Suggestions",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            let options = textwrap::Options::new(inner_width)
                .initial_indent("• ")
                .subsequent_indent("  ");
            for suggestion in &result.suggestions {
                for wrapped in textwrap::wrap(suggestion, &options) {
                    lines.push(Line::raw(wrapped.into_owned()));
                }
            }
        }

        if let Some(at) = result.processed_at_local() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Analyzed at {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let summary = Paragraph::new(lines)
            .style(Style::default().fg(MUTED))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(summary, area);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let height = paragraph.line_count(area.width) as u16;
    let [body] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, body);
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.state {
            ResultState::Ready(_) => " Your Emotional Analysis ",
            _ => " Analysis ",
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Indexed(99)))
            .title(Line::from(title).centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.state {
            ResultState::Idle => self.render_idle(frame, inner),
            ResultState::Loading => self.render_loading(frame, inner),
            ResultState::Ready(result) => self.render_result(frame, inner, result),
        }
    }
}
