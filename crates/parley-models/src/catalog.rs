// Model data lives next to each provider (openai.rs, cohere.rs, ...); this
// module only aggregates and resolves. Adding a provider means adding its
// table to PROVIDER_TABLES.

use crate::spec::ModelSpec;
use crate::{cohere, openai, pai, replicate};
use once_cell::sync::Lazy;
use parley_types::{ChatConfig, ModelCatalog, ModelCost, ModelId};
use std::collections::HashMap;

/// Model preselected for new chats
pub const DEFAULT_MODEL: &str = "openai:gpt-3.5-turbo-16k";

/// Provider tables in catalog order
const PROVIDER_TABLES: &[&[ModelSpec]] = &[
    openai::MODEL_SPECS,
    cohere::MODEL_SPECS,
    replicate::MODEL_SPECS,
    pai::MODEL_SPECS,
];

static MODEL_INDEX: Lazy<HashMap<&'static str, &'static ModelSpec>> =
    Lazy::new(|| all_model_specs().map(|spec| (spec.id, spec)).collect());

/// Every table entry, snapshots included, in catalog order
pub fn all_model_specs() -> impl Iterator<Item = &'static ModelSpec> {
    PROVIDER_TABLES.iter().flat_map(|table| table.iter())
}

/// Selectable model identifiers in catalog order
pub fn model_options() -> Vec<ModelId> {
    all_model_specs()
        .filter(|spec| spec.listed)
        .map(ModelSpec::model_id)
        .collect()
}

/// Exact-match lookup; unknown identifiers resolve to `None`
pub fn resolve_model_spec(model: &str) -> Option<&'static ModelSpec> {
    MODEL_INDEX.get(model).copied()
}

pub fn resolve_model_limit(model: &str) -> Option<u64> {
    resolve_model_spec(model).map(|spec| spec.max_tokens)
}

pub fn resolve_model_cost(model: &str) -> Option<ModelCost> {
    resolve_model_spec(model).map(|spec| spec.cost)
}

/// Returns model id -> max context tokens mapping
pub fn get_model_limits() -> HashMap<&'static str, u64> {
    all_model_specs()
        .map(|spec| (spec.id, spec.max_tokens))
        .collect()
}

/// Returns model id -> prompt/completion rates mapping
pub fn get_model_costs() -> HashMap<&'static str, ModelCost> {
    all_model_specs().map(|spec| (spec.id, spec.cost)).collect()
}

/// Built-in chat configuration: the default model with neutral sampling
pub fn default_chat_config() -> ChatConfig {
    ChatConfig::with_model(DEFAULT_MODEL)
}

/// `ModelCatalog` backed by the static provider tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticModelCatalog;

impl ModelCatalog for StaticModelCatalog {
    fn max_tokens(&self, model: &str) -> Option<u64> {
        resolve_model_limit(model)
    }

    fn cost(&self, model: &str) -> Option<ModelCost> {
        resolve_model_cost(model)
    }
}
