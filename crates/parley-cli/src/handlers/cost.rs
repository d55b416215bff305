use crate::handlers::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::CostViewModel;
use crate::types::OutputFormat;
use anyhow::Result;
use parley_models::resolve_model_cost;

pub fn estimate(
    model: &str,
    prompt_tokens: u64,
    completion_tokens: u64,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let Some(rates) = resolve_model_cost(model) else {
        anyhow::bail!(
            "Unknown model '{}'. Run 'parley models --all' to list known models",
            model
        );
    };

    let estimate = rates.estimate(prompt_tokens, completion_tokens);
    tracing::debug!(model, total = estimate.total, "estimated cost");

    ctx.render(CommandResultViewModel::new(CostViewModel {
        model: model.to_string(),
        rates,
        estimate,
    }))
}
