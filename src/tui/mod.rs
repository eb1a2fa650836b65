//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! Every batch of actions is followed by exactly one `draw()`, which
//! re-derives the whole screen from `App` and `TuiState`.
//!
//! ## Background Tasks
//!
//! Requests and the health probe run as tokio tasks and report back through
//! a `std::sync::mpsc` channel of `Action`s drained by the event loop.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, error, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{ExplainService, HttpExplainService, Submission};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, BackendStatus};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, InputPanel, InputPanelState, ResultPanel, ResultPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Code,
    Language,
    Submit,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Code => Focus::Language,
            Focus::Language => Focus::Submit,
            Focus::Submit => Focus::Results,
            Focus::Results => Focus::Code,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Code => Focus::Results,
            Focus::Language => Focus::Code,
            Focus::Submit => Focus::Language,
            Focus::Results => Focus::Submit,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub focus: Focus,
    pub input_panel: InputPanelState,
    pub result_panel: ResultPanelState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Routes one terminal event to the focused component and applies whatever
/// it emits to `App`. Returns the effect the loop must carry out.
pub(crate) fn handle_tui_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return Effect::None;
        }
        _ => {}
    }

    let global = matches!(event, TuiEvent::Submit | TuiEvent::CycleLanguage);
    if tui.focus == Focus::Results && !global {
        let mut panel = ResultPanel::new(
            &mut tui.result_panel,
            app.is_loading,
            app.error.as_deref(),
            app.explanation.as_ref(),
            true,
            0,
        );
        if let Some(result_event) = panel.handle_event(event) {
            debug!("Result panel: {:?}", result_event);
        }
        return Effect::None;
    }

    let input_event = InputPanel::new(
        &mut tui.input_panel,
        &app.code,
        app.language,
        app.is_loading,
        tui.focus,
    )
    .handle_event(event);

    match input_event {
        Some(InputEvent::SetCode(code)) => update(app, Action::SetCode(code)),
        Some(InputEvent::SetLanguage(language)) => update(app, Action::SetLanguage(language)),
        Some(InputEvent::Submit) => update(app, Action::Submit),
        None => Effect::None,
    }
}

pub fn run(config: ResolvedConfig, initial_code: String) -> std::io::Result<()> {
    let service: Arc<dyn ExplainService> = Arc::new(HttpExplainService::new(config.base_url));
    let mut app = App::new(service, config.language);
    app.code = initial_code;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_health_probe(app.service.clone(), tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            match handle_tui_event(app, tui, &event) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(submission) => {
                    spawn_request(app.service.clone(), submission, tx.clone());
                }
                Effect::None => {}
            }
            next = poll_event_immediate()?;
        }

        if should_quit {
            info!("Quit requested");
            break;
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(app, action) {
                Effect::SpawnRequest(submission) => {
                    spawn_request(app.service.clone(), submission, tx.clone());
                }
                Effect::Quit | Effect::None => {}
            }
        }
    }

    if app.is_loading {
        // The late response will find no receiver; nothing else to clean up.
        info!("Exiting with a request still in flight");
    }
    Ok(())
}

/// Sends `RequestSettled` when dropped, so the loading flag clears on every
/// exit path of the request task: success, failure, panic or abort.
struct SettleGuard {
    tx: mpsc::Sender<Action>,
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if self.tx.send(Action::RequestSettled).is_err() {
            warn!("Failed to send RequestSettled: receiver dropped");
        }
    }
}

fn spawn_request(
    service: Arc<dyn ExplainService>,
    submission: Submission,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning explain request");
    tokio::spawn(async move {
        let _settle = SettleGuard { tx: tx.clone() };

        let action = match service.explain(&submission).await {
            Ok(explanation) => Action::ExplanationReceived(explanation),
            Err(e) => {
                error!("Explain request failed: {}", e);
                Action::RequestFailed(e.user_message())
            }
        };

        if tx.send(action).is_err() {
            warn!("Failed to deliver explain result: receiver dropped");
        }
    })
}

fn spawn_health_probe(
    service: Arc<dyn ExplainService>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let status = match service.health().await {
            Ok(()) => BackendStatus::Online,
            Err(e) => {
                warn!("Health probe against {} failed: {}", service.base_url(), e);
                BackendStatus::Unreachable
            }
        };
        if tx.send(Action::BackendStatus(status)).is_err() {
            warn!("Failed to send health status: receiver dropped");
        }
    })
}
