//! Configuration structures for the Prompteur workspace.
//!
//! Configuration is TOML-based and merged from three sources, later sources
//! taking precedence:
//! - Bundled defaults (`include_str!` of `prompteur.toml`)
//! - User configuration (`~/.config/prompteur/prompteur.toml`)
//! - Working-directory configuration (`./prompteur.toml`)

use config::{Config, File, FileFormat};
use prompteur_error::{ConfigError, PrompteurResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../prompteur.toml");

/// Per-user request quota settings.
///
/// # Example
///
/// ```toml
/// [rate_limit]
/// max_requests = 5
/// window_secs = 600
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateLimitSection {
    /// Requests allowed per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Window length in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_max_requests() -> u32 {
    5
}

fn default_window_secs() -> u64 {
    600
}

impl Default for RateLimitSection {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

/// Model cascade and sampling settings for narration generation.
///
/// The model list is ordered by preference; each generation call tries the
/// models in this exact order until one returns non-empty text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSection {
    /// Ordered model fallback list.
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Sampling temperature passed to the backend.
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum output tokens per narration call.
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_models() -> Vec<String> {
    vec![
        "gemini-2.5-flash".to_string(),
        "gemini-2.5-pro".to_string(),
        "gemini-2.0-flash".to_string(),
    ]
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            models: default_models(),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// A hand-authored fallback script for one slide position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackEntry {
    /// 1-based slide position the script applies to.
    pub position: i32,
    /// The narration text to substitute.
    pub text: String,
}

/// Last-resort content substituted when a whole generation run fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct FallbackSection {
    /// Position-keyed hand-authored scripts.
    #[serde(default)]
    pub scripts: Vec<FallbackEntry>,
}

/// Root configuration for the Prompteur workspace.
///
/// # Examples
///
/// ```no_run
/// use prompteur_rate_limit::PrompteurConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PrompteurConfig::load()?;
/// assert!(config.rate_limit.max_requests > 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct PrompteurConfig {
    /// Per-user request quota.
    #[serde(default)]
    pub rate_limit: RateLimitSection,

    /// Model cascade and sampling settings.
    #[serde(default)]
    pub generation: GenerationSection,

    /// Demo fallback content.
    #[serde(default)]
    pub fallback: FallbackSection,
}

impl PrompteurConfig {
    /// Load configuration, merging bundled defaults with user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file exists but cannot be parsed,
    /// or if the merged configuration fails to deserialize.
    pub fn load() -> PrompteurResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("prompteur").join("prompteur.toml");
            builder = builder.add_source(File::from(user_path).required(false));
        }

        builder = builder.add_source(File::new("prompteur", FileFormat::Toml).required(false));

        let merged = builder
            .build()
            .map_err(|e| ConfigError::new(format!("failed to load configuration: {}", e)))?;

        let config: Self = merged
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("invalid configuration: {}", e)))?;

        debug!(
            max_requests = config.rate_limit.max_requests,
            window_secs = config.rate_limit.window_secs,
            models = config.generation.models.len(),
            "Loaded configuration"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config: PrompteurConfig =
            toml::from_str(DEFAULT_CONFIG).expect("bundled prompteur.toml must parse");
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_secs, 600);
        assert_eq!(config.generation.models[0], "gemini-2.5-flash");
        assert!(!config.fallback.scripts.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: PrompteurConfig = toml::from_str("").unwrap();
        assert_eq!(config.rate_limit, RateLimitSection::default());
        assert_eq!(config.generation.models.len(), 3);
        assert!(config.fallback.scripts.is_empty());
    }
}
