use crate::Result;
use crate::factory::generate_default_chat;
use once_cell::sync::Lazy;
use parley_models::{StaticModelCatalog, default_chat_config};
use parley_types::{Chat, ChatConfig};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// System prompt seeded into new chats unless overridden
pub const BUILTIN_SYSTEM_MESSAGE: &str = "You are ChatGPT, a large language model trained by OpenAI.\nCarefully heed the user's instructions. \nRespond using Markdown.";

/// Environment variable replacing the built-in system message
pub const SYSTEM_MESSAGE_ENV: &str = "PARLEY_DEFAULT_SYSTEM_MESSAGE";

/// Snapshot of the user-editable defaults consulted when a chat is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Empty string disables the seeded system message
    pub system_message: String,
    pub chat_config: ChatConfig,
}

impl SessionDefaults {
    pub fn new(system_message: impl Into<String>, chat_config: ChatConfig) -> Self {
        Self {
            system_message: system_message.into(),
            chat_config,
        }
    }

    /// Built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SYSTEM_MESSAGE, default_chat_config())
    }

    /// Built-in defaults with `PARLEY_DEFAULT_SYSTEM_MESSAGE` applied
    pub fn from_env() -> Self {
        Self::new(
            system_message_or_builtin(std::env::var(SYSTEM_MESSAGE_ENV).ok()),
            default_chat_config(),
        )
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self::from_env()
    }
}

/// A set variable wins even when empty
pub(crate) fn system_message_or_builtin(env_value: Option<String>) -> String {
    env_value.unwrap_or_else(|| BUILTIN_SYSTEM_MESSAGE.to_string())
}

static GLOBAL: Lazy<DefaultsStore> = Lazy::new(DefaultsStore::default);

/// Process-wide, mutable session defaults
///
/// Readers always receive an owned snapshot, so edits made here never reach
/// chats that were already created.
#[derive(Debug, Default)]
pub struct DefaultsStore {
    inner: RwLock<SessionDefaults>,
}

impl DefaultsStore {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            inner: RwLock::new(defaults),
        }
    }

    /// Shared instance, seeded from `SessionDefaults::from_env` on first use
    pub fn global() -> &'static DefaultsStore {
        &GLOBAL
    }

    pub fn snapshot(&self) -> SessionDefaults {
        self.read().clone()
    }

    pub fn system_message(&self) -> String {
        self.read().system_message.clone()
    }

    pub fn chat_config(&self) -> ChatConfig {
        self.read().chat_config.clone()
    }

    pub fn set_system_message(&self, message: impl Into<String>) {
        self.write().system_message = message.into();
    }

    /// Replace the default chat config after checking it against the catalog
    pub fn set_chat_config(&self, config: ChatConfig) -> Result<()> {
        config.validate(&StaticModelCatalog)?;
        tracing::debug!(model = %config.model, "default chat config updated");
        self.write().chat_config = config;
        Ok(())
    }

    pub fn replace(&self, defaults: SessionDefaults) {
        *self.write() = defaults;
    }

    /// Create a chat from the current defaults
    pub fn generate_default_chat(&self, title: Option<&str>, folder: Option<&str>) -> Chat {
        let defaults = self.snapshot();
        generate_default_chat(title, folder, &defaults)
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionDefaults> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionDefaults> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
