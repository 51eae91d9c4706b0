use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultState, ResultView, TitleBar};

/// Terminals at least this wide get the two panes side by side.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

const KEY_HINTS: &str = "Enter analyze · Ctrl+J newline · Ctrl+L clear · Esc quit";

/// Splits the main area into (form, result) panes.
pub fn pane_areas(main_area: Rect) -> (Rect, Rect) {
    if main_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [form, result] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .areas(main_area);
        (form, result)
    } else {
        let [form, result] =
            Layout::vertical([Constraint::Min(14), Constraint::Min(12)]).areas(main_area);
        (form, result)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.base_url.clone(),
        app.status_message.clone(),
        app.is_loading(),
    );
    title_bar.render(frame, title_area);

    let (form_area, result_area) = pane_areas(main_area);
    tui.form.render(frame, form_area);

    let mut result_view = ResultView::new(ResultState::from_analysis(&app.analysis), tui.spinner_frame);
    result_view.render(frame, result_area);

    let footer = Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));
    frame.render_widget(footer.centered(), footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::EmotionResult;
    use crate::core::state::AnalysisState;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_pane_areas_side_by_side_when_wide() {
        let (form, result) = pane_areas(Rect::new(0, 0, 120, 30));
        assert_eq!(form.y, result.y);
        assert!(result.x > form.x);
    }

    #[test]
    fn test_pane_areas_stacked_when_narrow() {
        let (form, result) = pane_areas(Rect::new(0, 0, 80, 40));
        assert_eq!(form.x, result.x);
        assert!(result.y > form.y);
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 120, 30);
        assert!(text.contains("Emotion Reflection"));
        assert!(text.contains("Share Your Thoughts"));
        assert!(text.contains("Ready to Analyze"));
        assert!(text.contains("Esc quit"));
    }

    #[test]
    fn test_draw_ui_ready() {
        let mut app = test_app();
        app.analysis = AnalysisState::Ready(EmotionResult::new("happy", 0.87));
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 120, 30);
        assert!(text.contains("Your Emotional Analysis"));
        assert!(text.contains("87%"));
    }

    #[test]
    fn test_draw_ui_narrow_terminal() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 60, 40);
        assert!(text.contains("Share Your Thoughts"));
        assert!(text.contains("Ready to Analyze"));
    }
}
