//! Uploaded-file analysis.
//!
//! Uploads are routed to one of three paths: medical report, prescription or
//! general file. Report and prescription paths try the AI model first and fall
//! back to local analysis: regex extraction of lab values, classification
//! against reference ranges, and a fixed-structure report built from the
//! knowledge tables.

pub mod extract;
pub mod general;
pub mod interpret;
pub mod orchestrator;
pub mod prescription;
pub mod report;
pub mod types;
pub mod upload;

pub use extract::*;
pub use general::*;
pub use interpret::*;
pub use orchestrator::*;
pub use prescription::*;
pub use report::*;
pub use types::*;
pub use upload::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is {size_bytes} bytes, above the {limit_bytes} byte limit")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("Not a regular file: {0}")]
    NotAFile(String),
}
