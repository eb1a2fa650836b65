//! # Application State
//!
//! Everything the coordinator owns, in one struct. Presentation-only state
//! (cursor, focus, active tab) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn ExplainService>  // backend client
//! ├── code: String                      // editor contents
//! ├── language: Language                // selected language
//! ├── explanation: Option<Explanation>  // last successful result
//! ├── is_loading: bool                  // request in flight
//! ├── error: Option<String>             // banner text
//! ├── status_message: String            // header status text
//! └── backend_status: BackendStatus     // start-up health probe
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{ExplainService, Explanation, Language, Submission};

/// Result of the start-up health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Unreachable,
}

impl BackendStatus {
    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "checking",
            BackendStatus::Online => "online",
            BackendStatus::Unreachable => "unreachable",
        }
    }
}

pub struct App {
    pub service: Arc<dyn ExplainService>,
    pub code: String,
    pub language: Language,
    pub explanation: Option<Explanation>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
    pub backend_status: BackendStatus,
}

impl App {
    pub fn new(service: Arc<dyn ExplainService>, language: Language) -> Self {
        Self {
            service,
            code: String::new(),
            language,
            explanation: None,
            is_loading: false,
            error: None,
            status_message: String::new(),
            backend_status: BackendStatus::default(),
        }
    }

    pub fn backend_url(&self) -> &str {
        self.service.base_url()
    }

    /// Snapshot of the current editor state as a request body.
    pub fn submission(&self) -> Submission {
        Submission {
            code: self.code.clone(),
            language: self.language,
        }
    }
}
