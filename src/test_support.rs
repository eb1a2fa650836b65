//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{
    ApiError, ExplainService, Explanation, LineNote, Refactor, Submission, SuggestedTest,
};

/// A service that answers every call with a canned result.
pub struct StubService {
    pub explain_result: fn() -> Result<Explanation, ApiError>,
    pub healthy: bool,
}

impl StubService {
    pub fn succeeding() -> Self {
        Self {
            explain_result: || Ok(sample_explanation()),
            healthy: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            explain_result: || {
                Err(ApiError::Api {
                    status: 400,
                    detail: Some("Code cannot be empty.".to_string()),
                    body: r#"{"detail":"Code cannot be empty."}"#.to_string(),
                })
            },
            healthy: false,
        }
    }
}

#[async_trait]
impl ExplainService for StubService {
    fn base_url(&self) -> &str {
        "http://stub.invalid"
    }

    async fn explain(&self, _submission: &Submission) -> Result<Explanation, ApiError> {
        (self.explain_result)()
    }

    async fn health(&self) -> Result<(), ApiError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ApiError::Network("connection refused".to_string()))
        }
    }
}

pub fn sample_explanation() -> Explanation {
    Explanation {
        summary: "Prints a greeting to standard output.".to_string(),
        line_by_line: vec![
            LineNote {
                line: 1,
                explanation: "Calls print with a string literal.".to_string(),
            },
            LineNote {
                line: 2,
                explanation: "Returns None implicitly.".to_string(),
            },
        ],
        suggested_tests: vec![SuggestedTest {
            test_case: "Captures stdout".to_string(),
            description: "Ensures the greeting is printed exactly once.".to_string(),
        }],
        potential_refactors: vec![
            Refactor {
                area: "Hardcoded text".to_string(),
                suggestion: "Pass the greeting as a parameter.".to_string(),
            },
            Refactor {
                area: "Entry point".to_string(),
                suggestion: "Guard with if __name__ == '__main__'.".to_string(),
            },
            Refactor {
                area: "Naming".to_string(),
                suggestion: "Give the function a descriptive name.".to_string(),
            },
        ],
    }
}

/// Creates a test App backed by a succeeding StubService.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubService::succeeding()), Default::default())
}
