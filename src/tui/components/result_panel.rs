//! # ResultPanel Component
//!
//! Shows the outcome of the last submission. Exactly one of four display
//! states is rendered, checked in this order:
//!
//! 1. loading → spinner
//! 2. error → error banner with the literal message
//! 3. no explanation → nothing
//! 4. explanation → tab strip plus the active tab's content
//!
//! The only state it owns is the selected tab and the content scroll
//! offset (`ResultPanelState`, persistent in `TuiState`). The selected tab
//! survives new submissions.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Tabs, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{Explanation, Tab, TabContent};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const LOADING_TEXT: &str = "Analyzing your code...";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Events emitted by the result panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultEvent {
    TabChanged(Tab),
}

pub struct ResultPanelState {
    pub active_tab: Tab,
    pub scroll_state: ScrollViewState,
}

impl Default for ResultPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultPanelState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            scroll_state: ScrollViewState::default(),
        }
    }

    /// Re-selecting the active tab changes nothing.
    pub fn select(&mut self, tab: Tab) -> Option<ResultEvent> {
        if tab == self.active_tab {
            return None;
        }
        self.active_tab = tab;
        self.scroll_state.scroll_to_top();
        Some(ResultEvent::TabChanged(tab))
    }
}

/// One pre-rendered block of tab content with its measured height.
struct RenderedRow<'a> {
    paragraph: Paragraph<'a>,
    height: usize,
}

impl<'a> RenderedRow<'a> {
    fn text(text: &'a str, width: u16) -> Self {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(width);
        Self { paragraph, height }
    }

    fn entry(label: String, body: &'a str, width: u16) -> Self {
        let lines = vec![
            Line::from(Span::styled(
                label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(body, Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: true });
        // Borders are included in line_count when a block is set.
        let height = paragraph.line_count(width);
        Self { paragraph, height }
    }
}

/// Vertical placement of each row inside the scroll canvas, which is at most
/// `u16::MAX` rows tall. Rows that start past the limit are dropped and the
/// last placed row is cut short.
fn layout_rows(heights: impl IntoIterator<Item = usize>) -> (u16, Vec<(u16, u16)>) {
    let limit = usize::from(u16::MAX);
    let mut placed = Vec::new();
    let mut y_offset = 0usize;
    for height in heights {
        if y_offset >= limit {
            break;
        }
        let height = height.min(limit - y_offset);
        // Both values are bounded by `limit` here.
        placed.push((y_offset as u16, height as u16));
        y_offset += height;
    }
    (y_offset as u16, placed)
}

fn build_rows<'a>(content: TabContent<'a>, width: u16) -> Vec<RenderedRow<'a>> {
    match content {
        TabContent::Text(text) => vec![RenderedRow::text(text, width)],
        TabContent::Entries(entries) => entries
            .into_iter()
            .map(|entry| RenderedRow::entry(entry.label, entry.body, width))
            .collect(),
    }
}

/// Transient render wrapper for the result region.
pub struct ResultPanel<'a> {
    state: &'a mut ResultPanelState,
    is_loading: bool,
    error: Option<&'a str>,
    explanation: Option<&'a Explanation>,
    focused: bool,
    spinner_frame: usize,
}

impl<'a> ResultPanel<'a> {
    pub fn new(
        state: &'a mut ResultPanelState,
        is_loading: bool,
        error: Option<&'a str>,
        explanation: Option<&'a Explanation>,
        focused: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            is_loading,
            error,
            explanation,
            focused,
            spinner_frame,
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, Style::default().fg(Color::Gray)),
        ]);
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled("Error: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(message),
        ]))
        .style(Style::default().fg(Color::LightRed))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        let height = banner.line_count(area.width).min(area.height as usize) as u16;
        let [banner_area, _] =
            Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(area);
        frame.render_widget(banner, banner_area);
    }

    fn render_explanation(&mut self, frame: &mut Frame, area: Rect, explanation: &Explanation) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs_area, _, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.label()))
            .select(self.state.active_tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, tabs_area);

        // Leave a column for the scrollbar
        let content_width = content_area.width.saturating_sub(1);
        let rows = build_rows(explanation.content(self.state.active_tab), content_width);
        let (total_height, placements) = layout_rows(rows.iter().map(|row| row.height));

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (row, (y, height)) in rows.into_iter().zip(placements) {
            scroll_view.render_widget(row.paragraph, Rect::new(0, y, content_width, height));
        }

        frame.render_stateful_widget(scroll_view, content_area, &mut self.state.scroll_state);
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.is_loading {
            self.render_loading(frame, area);
        } else if let Some(message) = self.error {
            self.render_error(frame, area, message);
        } else if let Some(explanation) = self.explanation {
            self.render_explanation(frame, area, explanation);
        }
    }
}

impl EventHandler for ResultPanel<'_> {
    type Event = ResultEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let active = self.state.active_tab;
        match event {
            TuiEvent::CursorLeft => self.state.select(active.prev()),
            TuiEvent::CursorRight => self.state.select(active.next()),
            TuiEvent::InputChar(c @ '1'..='4') => {
                let index = c.to_digit(10).map(|d| d as usize - 1)?;
                self.state.select(Tab::from_index(index)?)
            }
            TuiEvent::CursorUp => {
                self.state.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.state.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.state.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.state.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::CursorHome => {
                self.state.scroll_state.scroll_to_top();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_explanation;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        state: &mut ResultPanelState,
        is_loading: bool,
        error: Option<&str>,
        explanation: Option<&Explanation>,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                ResultPanel::new(state, is_loading, error, explanation, true, 0)
                    .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_wins_over_error_and_result() {
        let mut state = ResultPanelState::new();
        let explanation = sample_explanation();
        let text = draw(&mut state, true, Some("boom"), Some(&explanation));
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains("boom"));
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn test_error_wins_over_result() {
        let mut state = ResultPanelState::new();
        let explanation = sample_explanation();
        let text = draw(&mut state, false, Some("X"), Some(&explanation));
        assert!(text.contains("Error: X"));
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn test_nothing_rendered_without_result() {
        let mut state = ResultPanelState::new();
        let text = draw(&mut state, false, None, None);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_summary_tab_is_default() {
        let mut state = ResultPanelState::new();
        let explanation = sample_explanation();
        let text = draw(&mut state, false, None, Some(&explanation));
        for tab in Tab::ALL {
            assert!(text.contains(tab.label()));
        }
        assert!(text.contains(&explanation.summary));
    }

    #[test]
    fn test_each_tab_renders_one_row_per_element() {
        let explanation = sample_explanation();
        let expected = [
            (Tab::Summary, 1),
            (Tab::LineByLine, explanation.line_by_line.len()),
            (Tab::SuggestedTests, explanation.suggested_tests.len()),
            (Tab::PotentialRefactors, explanation.potential_refactors.len()),
        ];
        for (tab, count) in expected {
            assert_eq!(build_rows(explanation.content(tab), 60).len(), count, "{tab:?}");
        }
    }

    #[test]
    fn test_entry_row_height_includes_borders() {
        let row = RenderedRow::entry("Line 1:".to_string(), "Short body.", 60);
        // label + body + 2 borders
        assert_eq!(row.height, 4);
    }

    #[test]
    fn test_layout_rows_stacks_heights() {
        let (total, placed) = layout_rows([1, 4, 3]);
        assert_eq!(total, 8);
        assert_eq!(placed, vec![(0, 1), (1, 4), (5, 3)]);
    }

    #[test]
    fn test_layout_rows_caps_at_canvas_limit() {
        // 20k bordered entries of 4 rows each go past u16::MAX.
        let (total, placed) = layout_rows(std::iter::repeat_n(4, 20_000));
        assert_eq!(total, u16::MAX);
        assert_eq!(placed.len(), 16_384);
        assert_eq!(placed.last(), Some(&(65_532, 3)));

        let (total, placed) = layout_rows([70_000, 5]);
        assert_eq!(total, u16::MAX);
        assert_eq!(placed, vec![(0, u16::MAX)]);
    }

    #[test]
    fn test_switching_tabs_renders_entries() {
        let mut state = ResultPanelState::new();
        let explanation = sample_explanation();
        state.select(Tab::PotentialRefactors);
        let text = draw(&mut state, false, None, Some(&explanation));
        for refactor in &explanation.potential_refactors {
            assert!(text.contains(&refactor.area));
            assert!(text.contains(&refactor.suggestion));
        }
        assert!(!text.contains(&explanation.summary));
    }

    #[test]
    fn test_reselecting_active_tab_is_noop() {
        let mut state = ResultPanelState::new();
        let mut panel = ResultPanel::new(&mut state, false, None, None, true, 0);
        assert_eq!(panel.handle_event(&TuiEvent::InputChar('1')), None);
        assert_eq!(
            panel.handle_event(&TuiEvent::InputChar('3')),
            Some(ResultEvent::TabChanged(Tab::SuggestedTests))
        );
        assert_eq!(panel.handle_event(&TuiEvent::InputChar('3')), None);
        assert_eq!(
            panel.handle_event(&TuiEvent::CursorRight),
            Some(ResultEvent::TabChanged(Tab::PotentialRefactors))
        );
        assert_eq!(state.active_tab, Tab::PotentialRefactors);
    }

    #[test]
    fn test_ignores_other_digits() {
        let mut state = ResultPanelState::new();
        let mut panel = ResultPanel::new(&mut state, false, None, None, true, 0);
        assert_eq!(panel.handle_event(&TuiEvent::InputChar('9')), None);
        assert_eq!(state.active_tab, Tab::Summary);
    }
}
