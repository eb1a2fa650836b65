use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, InputPanel, ResultPanel};
use crate::tui::Focus;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const HELP_TEXT: &str =
    " Tab focus · Ctrl+S explain · Ctrl+L language · ←/→ or 1-4 tabs · Ctrl+C quit";

/// Vertical split: header, input, results, help line.
pub fn screen_layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min, Percentage};
    Layout::vertical([Length(1), Percentage(45), Min(0), Length(1)]).areas(area)
}

/// Re-derives the whole screen from `App` + `TuiState`. Called once after
/// every batch of state transitions.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [header_area, input_area, result_area, help_area] = screen_layout(frame.area());

    Header::new(app.backend_url(), app.backend_status, &app.status_message)
        .render(frame, header_area);

    InputPanel::new(
        &mut tui.input_panel,
        &app.code,
        app.language,
        app.is_loading,
        tui.focus,
    )
    .render(frame, input_area);

    ResultPanel::new(
        &mut tui.result_panel,
        app.is_loading,
        app.error.as_deref(),
        app.explanation.as_ref(),
        tui.focus == Focus::Results,
        spinner_frame,
    )
    .render(frame, result_area);

    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{sample_explanation, test_app};
    use crate::tui::components::header::APP_TITLE;
    use crate::tui::components::input_panel::{IDLE_CAPTION, IN_FLIGHT_CAPTION};
    use crate::tui::event::TuiEvent;
    use crate::tui::handle_tui_event;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App, tui: &mut TuiState) -> String {
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        let text = draw(&mut terminal, &app, &mut tui);

        assert!(text.contains(APP_TITLE));
        assert!(text.contains(IDLE_CAPTION));
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn test_submit_round_trip() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new();

        for c in "print('hi')".chars() {
            handle_tui_event(&mut app, &mut tui, &TuiEvent::InputChar(c));
        }
        assert_eq!(app.code, "print('hi')");

        let effect = handle_tui_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert!(matches!(effect, Effect::SpawnRequest(_)));

        let text = draw(&mut terminal, &app, &mut tui);
        assert!(text.contains(IN_FLIGHT_CAPTION));
        assert!(!text.contains(IDLE_CAPTION));

        // A second submit while in flight does nothing.
        let effect = handle_tui_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::None);

        update(&mut app, Action::ExplanationReceived(sample_explanation()));
        update(&mut app, Action::RequestSettled);

        let text = draw(&mut terminal, &app, &mut tui);
        assert!(text.contains(IDLE_CAPTION));
        assert!(text.contains("Summary"));
        assert!(text.contains(&sample_explanation().summary));
    }

    #[test]
    fn test_error_banner_replaces_results() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new();

        app.code = "x".to_string();
        update(&mut app, Action::Submit);
        update(&mut app, Action::RequestFailed("An unexpected error occurred.".to_string()));
        update(&mut app, Action::RequestSettled);

        let text = draw(&mut terminal, &app, &mut tui);
        assert!(text.contains("Error: An unexpected error occurred."));
        assert!(!text.contains("Summary"));
    }
}
