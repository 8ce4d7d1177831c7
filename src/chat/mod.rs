//! Conversation state and the controller that owns it.
//!
//! One conversation, one controller. Every mutation goes through a
//! `ChatController` method; capability ports (speech, clipboard) are injected
//! and may be absent.

pub mod capabilities;
pub mod controller;
pub mod system;
pub mod typewriter;
pub mod types;

pub use capabilities::*;
pub use controller::*;
pub use system::*;
pub use typewriter::*;
pub use types::*;

use thiserror::Error;

use crate::analysis::UploadError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("A response is already being generated")]
    Busy,

    #[error("No message with id {0}")]
    UnknownMessage(u64),

    #[error("No user message is waiting for a reply")]
    NothingPending,

    #[error("Message {0} cannot be regenerated")]
    NotRegenerable(u64),

    #[error("Message {0} is still being revealed")]
    StillTyping(u64),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("{0} is not available on this system")]
    Unavailable(&'static str),

    #[error("{capability} failed: {reason}")]
    Failed {
        capability: &'static str,
        reason: String,
    },
}
