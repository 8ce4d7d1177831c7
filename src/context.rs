//! The user's known health conditions, threaded into advice generation.

use serde::{Deserialize, Serialize};

/// Conditions known about the user (from an analysed report or a profile).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthContext {
    pub conditions: Vec<String>,
}

impl HealthContext {
    pub fn new<I, S>(conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Conditions joined with `", "` for prompt and reply text.
    pub fn joined(&self) -> String {
        self.conditions.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(!HealthContext::default().has_conditions());
    }

    #[test]
    fn joined_preserves_order() {
        let ctx = HealthContext::new(["diabetes", "hypertension"]);
        assert_eq!(ctx.joined(), "diabetes, hypertension");
    }
}
