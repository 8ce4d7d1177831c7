pub mod advisor;
pub mod client;
pub mod format;
pub mod gemini;
pub mod prompt;

pub use advisor::*;
pub use client::*;
pub use format::*;
pub use gemini::*;
pub use prompt::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("AI model is not configured. Set an API key first")]
    NotConfigured,

    #[error("Could not reach the AI service at {0}")]
    Connection(String),

    #[error("AI request timed out after {0}s")]
    Timeout(u64),

    #[error("AI service returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("AI service returned no text")]
    EmptyResponse,
}
