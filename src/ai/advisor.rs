use tracing::{info, warn};

use super::client::GenerativeModel;
use super::format::{format_health_response, format_report_response};
use super::prompt::{health_prompt, report_prompt, ReportKind, CONNECTION_TEST_PROMPT};
use super::AiError;
use crate::context::HealthContext;

/// Health-advice adapter over a generative model.
///
/// Builds the prompt, issues one request and post-processes the text.
/// Failures are returned to the caller, which owns the fallback.
pub struct HealthAdvisor<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> HealthAdvisor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn configure(&mut self, api_key: &str) -> bool {
        self.model.configure(api_key)
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_ready()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn get_health_advice(
        &self,
        query: &str,
        context: Option<&HealthContext>,
    ) -> Result<String, AiError> {
        self.ensure_ready()?;
        let raw = self.model.generate(&health_prompt(query, context))?;
        info!(len = raw.len(), "Health advice generated");
        Ok(format_health_response(&raw))
    }

    pub fn analyze_report(
        &self,
        kind: ReportKind,
        content: &str,
        file_name: &str,
    ) -> Result<String, AiError> {
        self.ensure_ready()?;
        let raw = self
            .model
            .generate(&report_prompt(kind, content, file_name))?;
        info!(kind = ?kind, len = raw.len(), "Report analysis generated");
        Ok(format_report_response(kind, &raw))
    }

    /// True when the model answers a trivial prompt with non-empty text.
    pub fn test_connection(&self) -> bool {
        if !self.is_ready() {
            return false;
        }
        match self.model.generate(CONNECTION_TEST_PROMPT) {
            Ok(text) => !text.is_empty(),
            Err(e) => {
                warn!(error = %e, "Connection test failed");
                false
            }
        }
    }

    fn ensure_ready(&self) -> Result<(), AiError> {
        if self.model.is_ready() {
            Ok(())
        } else {
            Err(AiError::NotConfigured)
        }
    }
}
