use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pricing::ModelCost;

/// Catalog key naming a provider+model pair (e.g. `openai:gpt-4`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Provider prefix before the first `:`, if the identifier is qualified
    ///
    /// `openai:gpt-4` -> `Some("openai")`, `pai-001-beta` -> `None`
    pub fn provider(&self) -> Option<&str> {
        self.0.split_once(':').map(|(provider, _)| provider)
    }

    /// Model name with the provider prefix stripped
    pub fn name(&self) -> &str {
        self.0
            .split_once(':')
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Read access to model reference data.
///
/// Lookups for identifiers outside the catalog return `None`.
pub trait ModelCatalog {
    fn max_tokens(&self, model: &str) -> Option<u64>;

    fn cost(&self, model: &str) -> Option<ModelCost>;

    fn contains(&self, model: &str) -> bool {
        self.max_tokens(model).is_some()
    }
}
