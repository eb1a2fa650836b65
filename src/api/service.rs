use std::fmt;

use async_trait::async_trait;

use super::types::{Explanation, Submission};

/// Shown when a failure carries no server-provided `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Errors that can occur while talking to the explanation service.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Service answered with a non-2xx status. `detail` is the body's
    /// `detail` string when the body had one.
    Api {
        status: u16,
        detail: Option<String>,
        body: String,
    },
    /// A 2xx body that is not a well-formed Explanation.
    Parse(String),
}

impl ApiError {
    /// Reduces the error to the single line shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, body, .. } => write!(f, "API error (HTTP {status}): {body}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Pulls a non-empty string `detail` field out of an error body, if there
/// is one.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

#[async_trait]
pub trait ExplainService: Send + Sync {
    /// Base URL of the service, for display.
    fn base_url(&self) -> &str;

    /// Submits one snippet and waits for the full explanation.
    async fn explain(&self, submission: &Submission) -> Result<Explanation, ApiError>;

    /// Probes the service root. `Ok(())` means it answered with a 2xx.
    async fn health(&self) -> Result<(), ApiError>;
}
