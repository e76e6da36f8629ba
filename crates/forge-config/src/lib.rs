//! # forge-config
//!
//! Layered configuration loading for Forge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORGE_*` prefix, `__` as separator)
//! 2. External overrides passed by the caller (e.g. `OPENAI_API_KEY`)
//! 3. Project-level `.forge/config.toml`
//! 4. User-level `~/.config/forge/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORGE_LLM__API_KEY` -> `llm.api_key`,
//! `FORGE_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use forge_config::ForgeConfig;
//!
//! let config = ForgeConfig::load_with_dotenv().expect("config");
//!
//! if config.llm.is_configured() {
//!     println!("model: {}", config.llm.model);
//! }
//! ```

mod error;
mod general;
mod llm;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use llm::LlmConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix for all Forge settings.
const ENV_PREFIX: &str = "FORGE_";

/// Conventional variables mapped onto Forge keys when present.
const WELL_KNOWN_ALIASES: &[(&str, &str)] = &[("OPENAI_API_KEY", "FORGE_LLM__API_KEY")];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ForgeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_overrides(&[])
    }

    /// Load configuration with `.env` file support and well-known aliases.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_with_env_overrides(&Self::well_known_overrides())
    }

    /// Load configuration with extra `FORGE_*`-style key/value pairs layered
    /// between the TOML files and the process environment.
    ///
    /// Keys that do not carry the `FORGE_` prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_overrides(overrides).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain without overrides.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".forge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Caller-supplied overrides
        for (key, value) in overrides {
            if let Some(path) = override_key_path(key) {
                let parsed: Value = value.parse().unwrap_or_else(|_| Value::from(value.clone()));
                figment = figment.merge(Serialized::default(&path, parsed));
            }
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Overrides derived from conventional variables such as `OPENAI_API_KEY`.
    #[must_use]
    pub fn well_known_overrides() -> Vec<(String, String)> {
        WELL_KNOWN_ALIASES
            .iter()
            .filter_map(|(alias, key)| {
                std::env::var(alias)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| ((*key).to_string(), value))
            })
            .collect()
    }

    /// Check every section's field constraints.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.llm.validate()
    }

    /// Copy with secrets masked, safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            llm: self.llm.redacted(),
            ..self.clone()
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forge").join("config.toml"))
    }
}

/// Map `FORGE_LLM__API_KEY` to `llm.api_key`.
fn override_key_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
