//! HTTP implementation of [`ExplainService`] over reqwest.
//!
//! One POST per submission. No retry, no timeout beyond what the network
//! stack applies on its own.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{ApiError, ExplainService, extract_detail};
use super::types::{Explanation, Submission};

pub struct HttpExplainService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpExplainService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ExplainService for HttpExplainService {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn explain(&self, submission: &Submission) -> Result<Explanation, ApiError> {
        info!(
            "POST {}/explain: language={}, code_len={}",
            self.base_url,
            submission.language.value(),
            submission.code.len()
        );

        let response = self
            .client
            .post(format!("{}/explain", self.base_url))
            .json(submission)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Explain response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Explain API error: {} - {}", status.as_u16(), body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body),
                body,
            });
        }

        let explanation: Explanation =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!(
            "Explanation received: {} line notes, {} tests, {} refactors",
            explanation.line_by_line.len(),
            explanation.suggested_tests.len(),
            explanation.potential_refactors.len()
        );
        Ok(explanation)
    }

    async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Health probe ok: {}", status);
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body),
                body,
            })
        }
    }
}
