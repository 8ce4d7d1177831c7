use std::sync::Mutex;

use super::AiError;

/// Hosted text-generation model abstraction (allows mocking).
///
/// One call to `generate` issues exactly one request: no retries, no
/// streaming.
pub trait GenerativeModel {
    /// Install an API key. Returns false when the key is unusable.
    fn configure(&mut self, api_key: &str) -> bool;

    fn is_ready(&self) -> bool;

    fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Mock model for testing: returns a scripted reply or a scripted failure
/// and records every prompt it was sent.
pub struct MockModel {
    reply: Result<String, AiError>,
    ready: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    /// A configured model that always answers `reply`.
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            ready: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A configured model whose every call fails with `error`.
    pub fn failing(error: AiError) -> Self {
        Self {
            reply: Err(error),
            ready: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A model with no API key: `generate` is never reached by the advisor.
    pub fn unconfigured() -> Self {
        Self {
            ready: false,
            ..Self::new("")
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

impl GenerativeModel for MockModel {
    fn configure(&mut self, api_key: &str) -> bool {
        self.ready = !api_key.trim().is_empty();
        self.ready
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn generate(&self, prompt: &str) -> Result<String, AiError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_reply() {
        let model = MockModel::new("test response");
        assert_eq!(model.generate("prompt").unwrap(), "test response");
    }

    #[test]
    fn mock_records_prompts_in_order() {
        let model = MockModel::new("ok");
        model.generate("first").unwrap();
        model.generate("second").unwrap();
        assert_eq!(model.prompts(), vec!["first", "second"]);
        assert_eq!(model.call_count(), 2);
    }

    #[test]
    fn failing_mock_returns_error() {
        let model = MockModel::failing(AiError::Timeout(30));
        assert_eq!(model.generate("p"), Err(AiError::Timeout(30)));
    }

    #[test]
    fn configure_rejects_blank_key() {
        let mut model = MockModel::unconfigured();
        assert!(!model.is_ready());
        assert!(!model.configure("   "));
        assert!(model.configure("AIza-test"));
        assert!(model.is_ready());
    }
}
