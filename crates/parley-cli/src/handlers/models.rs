use crate::handlers::HandlerContext;
use crate::presentation::view_models::{ModelEntry, ModelListViewModel};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};
use crate::types::OutputFormat;
use anyhow::Result;
use parley_models::{DEFAULT_MODEL, all_model_specs};

pub fn list(include_snapshots: bool, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let models: Vec<ModelEntry> = all_model_specs()
        .filter(|spec| include_snapshots || spec.listed)
        .map(|spec| ModelEntry {
            id: spec.id.to_string(),
            provider: spec.model_id().provider().map(str::to_string),
            max_tokens: spec.max_tokens,
            prompt: spec.cost.prompt,
            completion: spec.cost.completion,
            listed: spec.listed,
            is_default: spec.id == DEFAULT_MODEL,
        })
        .collect();

    let count = models.len();
    let mut result = CommandResultViewModel::new(ModelListViewModel {
        default_model: DEFAULT_MODEL.to_string(),
        models,
    })
    .with_badge(StatusBadge::info(format!("{} models", count)));

    if !include_snapshots {
        result = result.with_suggestion(
            Guidance::new("Include dated snapshot models").with_command("parley models --all"),
        );
    }

    ctx.render(result)
}
