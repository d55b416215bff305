use parley_runtime::SessionDefaults;
use parley_types::{Chat, CostEstimate, ModelCost, TokenRate};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ModelEntry {
    pub id: String,
    pub provider: Option<String>,
    pub max_tokens: u64,
    pub prompt: TokenRate,
    pub completion: TokenRate,
    pub listed: bool,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelListViewModel {
    pub default_model: String,
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostViewModel {
    pub model: String,
    pub rates: ModelCost,
    pub estimate: CostEstimate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ChatViewModel {
    pub chat: Chat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub file_exists: bool,
    pub defaults: SessionDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub overwritten: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageListViewModel {
    pub languages: Vec<&'static str>,
}
