//! Static health knowledge tables.
//!
//! Everything here is immutable data compiled into the binary:
//! - OTC medications and symptom foods (rule-based advice)
//! - reference ranges for lab tests, with the labels used to find them in text
//! - value-specific diets keyed by (test, status)
//! - condition recommendation bundles used by report analysis
//! - prescription drug detection rules
//!
//! Lookups are total: every accessor either returns a specific entry or a
//! documented generic fallback.

pub mod conditions;
pub mod diets;
pub mod medications;
pub mod otc;
pub mod reference_ranges;

pub use conditions::*;
pub use diets::*;
pub use medications::*;
pub use otc::*;
pub use reference_ranges::*;

/// Condition name used when no specific condition was detected.
pub const GENERAL_HEALTH: &str = "general health";

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render items as `• item` lines.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
