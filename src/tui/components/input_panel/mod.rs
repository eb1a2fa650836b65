//! # InputPanel Component
//!
//! Code editor, language selector and submit button.
//!
//! ## Responsibilities
//!
//! - Capture code edits (typing, paste, newline, backspace, delete, cursor movement)
//! - Cycle the selected language
//! - Trigger submission (Enter on the button, or Ctrl+S anywhere)
//!
//! ## State Management
//!
//! The panel owns no domain state. Code, language and the loading flag are
//! props from `App`; every edit is emitted upward as an `InputEvent` carrying
//! the full new value, so the editor is a controlled input. Only the cursor
//! lives here, in `InputPanelState`, which persists in `TuiState` while an
//! `InputPanel` wrapper is built per frame with borrowed state.

mod cursor;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::api::Language;
use crate::tui::Focus;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use cursor::CursorState;
use cursor::{next_char_boundary, prev_char_boundary};

pub const IDLE_CAPTION: &str = "Explain Code";
pub const IN_FLIGHT_CAPTION: &str = "Analyzing...";
const PLACEHOLDER: &str = "Paste your code snippet here...";

/// Width of the language selector + button column
const SIDE_COLUMN_WIDTH: u16 = 22;

/// High-level events emitted by the InputPanel
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// New full contents of the code editor
    SetCode(String),
    SetLanguage(Language),
    Submit,
}

/// Persistent presentation state for the panel.
#[derive(Debug, Default)]
pub struct InputPanelState {
    pub cursor: CursorState,
}

impl InputPanelState {
    pub fn new() -> Self {
        Self {
            cursor: CursorState::new(),
        }
    }
}

/// Transient wrapper built each frame from props plus borrowed state.
///
/// # Props
///
/// - `code`: Editor contents (from App)
/// - `language`: Selected language (from App)
/// - `is_loading`: Whether a request is in flight (from App)
/// - `focus`: Which control receives keys (from TuiState)
pub struct InputPanel<'a> {
    state: &'a mut InputPanelState,
    code: &'a str,
    language: Language,
    is_loading: bool,
    focus: Focus,
}

impl<'a> InputPanel<'a> {
    pub fn new(
        state: &'a mut InputPanelState,
        code: &'a str,
        language: Language,
        is_loading: bool,
        focus: Focus,
    ) -> Self {
        Self {
            state,
            code,
            language,
            is_loading,
            focus,
        }
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        let pos = self.state.cursor.pos;
        let mut code = String::with_capacity(self.code.len() + text.len());
        code.push_str(&self.code[..pos]);
        code.push_str(text);
        code.push_str(&self.code[pos..]);
        self.state.cursor.pos = pos + text.len();
        Some(InputEvent::SetCode(code))
    }

    fn remove(&mut self, start: usize, end: usize) -> Option<InputEvent> {
        let mut code = String::with_capacity(self.code.len());
        code.push_str(&self.code[..start]);
        code.push_str(&self.code[end..]);
        self.state.cursor.pos = start;
        Some(InputEvent::SetCode(code))
    }

    fn handle_editor_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        let cursor = &mut self.state.cursor;
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert(c.encode_utf8(&mut buf))
            }
            TuiEvent::Enter => self.insert("\n"),
            TuiEvent::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&normalized)
            }
            TuiEvent::Backspace => {
                if cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(self.code, cursor.pos);
                let end = cursor.pos;
                self.remove(prev, end)
            }
            TuiEvent::Delete => {
                if cursor.pos >= self.code.len() {
                    return None;
                }
                let next = next_char_boundary(self.code, cursor.pos);
                let start = cursor.pos;
                self.remove(start, next)
            }
            TuiEvent::CursorLeft => {
                cursor.pos = prev_char_boundary(self.code, cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if cursor.pos < self.code.len() {
                    cursor.pos = next_char_boundary(self.code, cursor.pos);
                }
                None
            }
            TuiEvent::CursorUp => {
                cursor.move_vertically(self.code, -1);
                None
            }
            TuiEvent::CursorDown => {
                cursor.move_vertically(self.code, 1);
                None
            }
            TuiEvent::CursorHome => {
                cursor.pos = cursor.line_start(self.code);
                None
            }
            TuiEvent::CursorEnd => {
                cursor.pos = cursor.line_end(self.code);
                None
            }
            _ => None,
        }
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Code;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(focus_style(focused))
            .title(" Your Code ");
        let inner = block.inner(area);

        self.state
            .cursor
            .update_scroll(self.code, inner.width, inner.height);

        let paragraph = if self.code.is_empty() {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let lines: Vec<Line> = self
                .state
                .cursor
                .visible_lines(self.code, inner.height)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(lines)
        };
        frame.render_widget(paragraph.block(block), area);

        if focused {
            let (x, y) = self.state.cursor.viewport_pos(self.code);
            frame.set_cursor_position((inner.x + x, inner.y + y));
        }
    }

    fn render_language_selector(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Language;
        let lines: Vec<Line> = Language::ALL
            .iter()
            .map(|&lang| {
                if lang == self.language {
                    Line::from(Span::styled(
                        format!("● {}", lang.label()),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("○ {}", lang.label()),
                        Style::default().fg(Color::Gray),
                    ))
                }
            })
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(focus_style(focused))
            .title(" Language ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Submit;
        let (caption, style) = if self.is_loading {
            (IN_FLIGHT_CAPTION, Style::default().fg(Color::DarkGray))
        } else if focused {
            (
                IDLE_CAPTION,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                IDLE_CAPTION,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(caption)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(focus_style(focused && !self.is_loading)),
            );
        frame.render_widget(button, area);
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl Component for InputPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [editor_area, side_area] =
            Layout::horizontal([Min(0), Length(SIDE_COLUMN_WIDTH)]).areas(area);
        let language_height = Language::ALL.len() as u16 + 2;
        let [language_area, _, button_area] =
            Layout::vertical([Length(language_height), Min(0), Length(3)]).areas(side_area);

        self.state.cursor.clamp(self.code);
        self.render_editor(frame, editor_area);
        self.render_language_selector(frame, language_area);
        self.render_button(frame, button_area);
    }
}

impl EventHandler for InputPanel<'_> {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.state.cursor.clamp(self.code);

        match event {
            TuiEvent::Submit => return (!self.is_loading).then_some(InputEvent::Submit),
            TuiEvent::CycleLanguage => return Some(InputEvent::SetLanguage(self.language.next())),
            _ => {}
        }

        match self.focus {
            Focus::Code => self.handle_editor_event(event),
            Focus::Language => match event {
                TuiEvent::CursorLeft | TuiEvent::CursorUp => {
                    Some(InputEvent::SetLanguage(self.language.prev()))
                }
                TuiEvent::CursorRight | TuiEvent::CursorDown | TuiEvent::Enter => {
                    Some(InputEvent::SetLanguage(self.language.next()))
                }
                _ => None,
            },
            Focus::Submit => match event {
                TuiEvent::Enter if !self.is_loading => Some(InputEvent::Submit),
                _ => None,
            },
            Focus::Results => None,
        }
    }
}
