use crate::spec::ModelSpec;
use parley_types::TokenRate;

const COMMAND_RATE: TokenRate = TokenRate::per_million(15.00);

/// Cohere model specifications
pub(crate) const MODEL_SPECS: &[ModelSpec] = &[
    ModelSpec::new("cohere:command-nightly", 4096, COMMAND_RATE, COMMAND_RATE),
    ModelSpec::new(
        "cohere:command-light-nightly",
        4096,
        COMMAND_RATE,
        COMMAND_RATE,
    ),
];
