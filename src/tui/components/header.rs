//! # Header Component
//!
//! Top line of the screen: application title, backend URL and health, and
//! the transient status message.
//!
//! Stateless: everything it shows arrives as props.
//!
//! 1. **Status message**: `"GenAI Code Explainer │ http://localhost:8000 (online) │ Please fill out this field."`
//! 2. **Default**: `"GenAI Code Explainer │ http://localhost:8000 (online)"`

use crate::core::state::BackendStatus;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "GenAI Code Explainer";

pub struct Header<'a> {
    pub backend_url: &'a str,
    pub backend_status: BackendStatus,
    pub status_message: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(backend_url: &'a str, backend_status: BackendStatus, status_message: &'a str) -> Self {
        Self {
            backend_url,
            backend_status,
            status_message,
        }
    }
}

fn status_color(status: BackendStatus) -> Color {
    match status {
        BackendStatus::Checking => Color::DarkGray,
        BackendStatus::Online => Color::Green,
        BackendStatus::Unreachable => Color::Red,
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(self.backend_url, Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" ({})", self.backend_status.label()),
                Style::default().fg(status_color(self.backend_status)),
            ),
        ];

        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(header: &mut Header) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_title_and_backend() {
        let mut header = Header::new("http://localhost:8000", BackendStatus::Online, "");
        let text = render_text(&mut header);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("http://localhost:8000 (online)"));
        assert_eq!(text.matches('│').count(), 1);
    }

    #[test]
    fn test_header_with_status_message() {
        let mut header = Header::new(
            "http://localhost:8000",
            BackendStatus::Unreachable,
            "Please fill out this field.",
        );
        let text = render_text(&mut header);
        assert!(text.contains("(unreachable)"));
        assert!(text.contains("Please fill out this field."));
    }
}
