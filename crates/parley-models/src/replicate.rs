use crate::spec::ModelSpec;
use parley_types::TokenRate;

/// Replicate-hosted Llama 2 chat models
pub(crate) const MODEL_SPECS: &[ModelSpec] = &[
    ModelSpec::new(
        "replicate:replicate/llama-2-7b-chat",
        4096,
        TokenRate::per_million(0.07),
        TokenRate::per_million(0.28),
    ),
    ModelSpec::new(
        "replicate:replicate/llama-2-13b-chat",
        4096,
        TokenRate::per_million(0.14),
        TokenRate::per_million(0.56),
    ),
    ModelSpec::new(
        "replicate:replicate/llama-2-70b-chat",
        4096,
        TokenRate::per_million(0.70),
        TokenRate::per_million(2.80),
    ),
];
