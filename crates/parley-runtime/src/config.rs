use crate::defaults::SessionDefaults;
use crate::{Error, Result};
use parley_models::StaticModelCatalog;
use parley_types::{ChatConfig, ModelId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PARLEY_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.parley
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PARLEY_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("parley"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".parley"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Partial chat config; unset keys keep the built-in value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfigSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
}

impl ChatConfigSection {
    pub fn apply(&self, mut base: ChatConfig) -> ChatConfig {
        if let Some(model) = &self.model {
            base.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            base.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            base.temperature = temperature;
        }
        if let Some(top_p) = self.top_p {
            base.top_p = top_p;
        }
        if let Some(presence_penalty) = self.presence_penalty {
            base.presence_penalty = presence_penalty;
        }
        if let Some(frequency_penalty) = self.frequency_penalty {
            base.frequency_penalty = frequency_penalty;
        }
        base
    }
}

impl From<&ChatConfig> for ChatConfigSection {
    fn from(config: &ChatConfig) -> Self {
        Self {
            model: Some(config.model.clone()),
            max_tokens: Some(config.max_tokens),
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            presence_penalty: Some(config.presence_penalty),
            frequency_penalty: Some(config.frequency_penalty),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(default)]
    pub chat_config: ChatConfigSection,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `config.toml` inside the resolved workspace directory
    pub fn default_path(data_dir: Option<&str>) -> Result<PathBuf> {
        Ok(resolve_workspace_path(data_dir)?.join("config.toml"))
    }

    /// Fully populated config describing `defaults`
    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        Self {
            defaults: DefaultsSection {
                system_message: Some(defaults.system_message.clone()),
                chat_config: ChatConfigSection::from(&defaults.chat_config),
            },
        }
    }

    /// Layer this file over the environment-aware built-in defaults
    pub fn session_defaults(&self) -> Result<SessionDefaults> {
        let base = SessionDefaults::from_env();

        let system_message = self
            .defaults
            .system_message
            .clone()
            .unwrap_or(base.system_message);
        let chat_config = self.defaults.chat_config.apply(base.chat_config);
        chat_config.validate(&StaticModelCatalog)?;

        Ok(SessionDefaults::new(system_message, chat_config))
    }
}
