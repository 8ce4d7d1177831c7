//! Keyword routing for chat messages.
//!
//! `classify` sorts a message into independent categories by substring match,
//! `fallback` maps a verdict to a canned reply, and `rule_advice` answers
//! symptom and condition questions from the knowledge tables when no model is
//! available. All three are pure.

pub mod classify;
pub mod fallback;
pub mod keywords;
pub mod rule_advice;

pub use classify::*;
pub use fallback::*;
pub use keywords::*;
pub use rule_advice::*;
