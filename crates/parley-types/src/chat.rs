use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{ModelCatalog, ModelId};

/// Maximum output tokens a new chat asks for unless configured otherwise
pub const DEFAULT_USER_MAX_TOKEN: u64 = 4000;

pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);
pub const TOP_P_RANGE: (f64, f64) = (0.0, 1.0);
pub const PENALTY_RANGE: (f64, f64) = (-2.0, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Model choice plus generation parameters applied to one conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: ModelId,
    pub max_tokens: u64,
    pub temperature: f64,
    pub top_p: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl ChatConfig {
    /// Config for `model` with neutral sampling parameters
    pub fn with_model(model: impl Into<ModelId>) -> Self {
        Self {
            model: model.into(),
            max_tokens: DEFAULT_USER_MAX_TOKEN,
            temperature: 1.0,
            top_p: 1.0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        }
    }

    /// Check the model against `catalog` and every parameter against its range
    pub fn validate(&self, catalog: &dyn ModelCatalog) -> Result<()> {
        let limit = catalog
            .max_tokens(self.model.as_str())
            .ok_or_else(|| Error::UnknownModel(self.model.to_string()))?;

        if self.max_tokens == 0 || self.max_tokens > limit {
            return Err(Error::ExceedsModelLimit {
                model: self.model.to_string(),
                max_tokens: self.max_tokens,
                limit,
            });
        }

        check_range("temperature", self.temperature, TEMPERATURE_RANGE)?;
        check_range("top_p", self.top_p, TOP_P_RANGE)?;
        check_range("presence_penalty", self.presence_penalty, PENALTY_RANGE)?;
        check_range("frequency_penalty", self.frequency_penalty, PENALTY_RANGE)?;

        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// A single chat session: identity, messages and its own configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub title: String,
    pub messages: Vec<Message>,
    pub config: ChatConfig,
    /// False while the title is still a placeholder
    pub title_set: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl Chat {
    pub fn system_message(&self) -> Option<&Message> {
        self.messages.first().filter(|m| m.role == Role::System)
    }
}
