use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Medikami";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hosted generative-language API defaults.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Per-character delay of the typewriter reveal.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 10;

/// Environment variables read by `AssistantConfig::from_env`.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_LEGACY: &str = "VITE_GEMINI_API_KEY";
pub const ENV_MODEL: &str = "MEDIKAMI_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "MEDIKAMI_TIMEOUT_SECS";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medikami=info,medikami_lib=info,warn"
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,

    #[error("Temperature {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(f32),

    #[error("Max output tokens must be positive")]
    ZeroMaxTokens,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime settings for the assistant and its AI backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Absent key means "fallback responders only".
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    pub typing_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
        }
    }
}

impl AssistantConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests inject a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(ENV_API_KEY)
            .or_else(|| lookup(ENV_API_KEY_LEGACY))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::TemperatureOutOfRange(self.temperature));
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::ZeroMaxTokens);
        }
        Ok(())
    }

    /// Key prefix safe for logs.
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_deref().map(mask_key)
    }
}

/// Show at most the first 4 characters of a secret.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}…")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn app_name_is_medikami() {
        assert_eq!(APP_NAME, "Medikami");
    }

    #[test]
    fn defaults_match_hosted_model_settings() {
        let config = AssistantConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.max_output_tokens, 4096);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_key_read_from_primary_variable() {
        let config =
            AssistantConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "abc123")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn api_key_falls_back_to_legacy_variable() {
        let config =
            AssistantConfig::from_lookup(lookup_from(&[(ENV_API_KEY_LEGACY, "legacy")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn blank_api_key_is_treated_as_absent() {
        let config = AssistantConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "   ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn model_and_timeout_overrides() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            (ENV_MODEL, "gemini-2.0-flash"),
            (ENV_TIMEOUT_SECS, "12"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn non_numeric_timeout_rejected() {
        let err = AssistantConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err =
            AssistantConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn temperature_out_of_range_rejected() {
        let config = AssistantConfig {
            temperature: 3.5,
            ..AssistantConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TemperatureOutOfRange(3.5))
        );
    }

    #[test]
    fn masked_key_never_exposes_full_secret() {
        let config = AssistantConfig {
            api_key: Some("AIzaSyVerySecret".into()),
            ..AssistantConfig::default()
        };
        let masked = config.masked_key().unwrap();
        assert!(masked.starts_with("AIza"));
        assert!(!masked.contains("Secret"));
    }
}
