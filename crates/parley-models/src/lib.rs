// Model spec type shared by the provider tables
pub mod spec;

// Provider tables
pub mod cohere;
pub mod openai;
pub mod pai;
pub mod replicate;

// Centralized resolution
pub mod catalog;

pub use catalog::{
    DEFAULT_MODEL, StaticModelCatalog, all_model_specs, default_chat_config, get_model_costs,
    get_model_limits, model_options, resolve_model_cost, resolve_model_limit, resolve_model_spec,
};
pub use spec::ModelSpec;
