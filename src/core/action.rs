//! # Actions
//!
//! Everything that can happen in the explainer becomes an `Action`.
//! User presses Ctrl+S? That's `Action::Submit`.
//! Backend responds? That's `Action::ExplanationReceived(explanation)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter should carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{Explanation, Language, Submission};
use crate::core::state::{App, BackendStatus};

/// Status hint shown when submit is attempted with an empty editor.
pub const EMPTY_CODE_HINT: &str = "Please fill out this field.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCode(String),
    SetLanguage(Language),
    Submit,
    ExplanationReceived(Explanation),
    RequestFailed(String),
    /// Sent last by every request task, whatever the outcome.
    RequestSettled,
    BackendStatus(BackendStatus),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest(Submission),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetCode(code) => {
            if !code.is_empty() && app.status_message == EMPTY_CODE_HINT {
                app.status_message.clear();
            }
            app.code = code;
            Effect::None
        }
        Action::SetLanguage(language) => {
            debug!("Language set to {}", language.value());
            app.language = language;
            Effect::None
        }
        Action::Submit => {
            if app.is_loading {
                warn!("Submit ignored: a request is already in flight");
                return Effect::None;
            }
            if app.code.is_empty() {
                app.status_message = EMPTY_CODE_HINT.to_string();
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.explanation = None;
            app.status_message.clear();
            info!("Submitting {} bytes of {}", app.code.len(), app.language.value());
            Effect::SpawnRequest(app.submission())
        }
        Action::ExplanationReceived(explanation) => {
            app.explanation = Some(explanation);
            Effect::None
        }
        Action::RequestFailed(message) => {
            app.error = Some(message);
            Effect::None
        }
        Action::RequestSettled => {
            app.is_loading = false;
            Effect::None
        }
        Action::BackendStatus(status) => {
            info!("Backend status: {}", status.label());
            app.backend_status = status;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
