//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::scheme::BUILTIN_SCHEMES;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub scheme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub auto_transliterate: bool,
}

/// A preset input offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Example {
    pub label: String,
    pub text: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if !BUILTIN_SCHEMES.contains(&s.engine.scheme.as_str()) {
        return Err(SettingsError::InvalidValue {
            field: "engine.scheme".to_string(),
            reason: format!("must be one of {}", BUILTIN_SCHEMES.join(", ")),
        });
    }

    for (i, ex) in s.examples.iter().enumerate() {
        if ex.label.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("examples[{i}].label"),
                reason: "must not be empty".to_string(),
            });
        }
        if ex.text.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("examples[{i}].text"),
                reason: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
