use crate::spec::ModelSpec;
use parley_types::TokenRate;

const GPT_35_TURBO_PROMPT: TokenRate = TokenRate::per_thousand(0.0015);
const GPT_35_TURBO_COMPLETION: TokenRate = TokenRate::per_thousand(0.002);
const GPT_35_TURBO_16K_PROMPT: TokenRate = TokenRate::per_thousand(0.003);
const GPT_35_TURBO_16K_COMPLETION: TokenRate = TokenRate::per_thousand(0.004);
const GPT_4_PROMPT: TokenRate = TokenRate::per_thousand(0.03);
const GPT_4_COMPLETION: TokenRate = TokenRate::per_thousand(0.06);
const GPT_4_32K_PROMPT: TokenRate = TokenRate::per_thousand(0.06);
const GPT_4_32K_COMPLETION: TokenRate = TokenRate::per_thousand(0.12);
const DAVINCI_PROMPT: TokenRate = TokenRate::per_million(30.00);
const DAVINCI_COMPLETION: TokenRate = TokenRate::per_million(120.00);

/// OpenAI model specifications
pub(crate) const MODEL_SPECS: &[ModelSpec] = &[
    // GPT-3.5 series
    ModelSpec::new(
        "openai:gpt-3.5-turbo",
        4096,
        GPT_35_TURBO_PROMPT,
        GPT_35_TURBO_COMPLETION,
    ),
    ModelSpec::snapshot(
        "openai:gpt-3.5-turbo-0301",
        4096,
        GPT_35_TURBO_PROMPT,
        GPT_35_TURBO_COMPLETION,
    ),
    ModelSpec::snapshot(
        "openai:gpt-3.5-turbo-0613",
        4096,
        GPT_35_TURBO_PROMPT,
        GPT_35_TURBO_COMPLETION,
    ),
    ModelSpec::new(
        "openai:gpt-3.5-turbo-16k",
        16384,
        GPT_35_TURBO_16K_PROMPT,
        GPT_35_TURBO_16K_COMPLETION,
    ),
    ModelSpec::snapshot(
        "openai:gpt-3.5-turbo-16k-0613",
        16384,
        GPT_35_TURBO_16K_PROMPT,
        GPT_35_TURBO_16K_COMPLETION,
    ),
    // GPT-4 series
    ModelSpec::new("openai:gpt-4", 8192, GPT_4_PROMPT, GPT_4_COMPLETION),
    ModelSpec::snapshot("openai:gpt-4-0314", 8192, GPT_4_PROMPT, GPT_4_COMPLETION),
    ModelSpec::snapshot("openai:gpt-4-0613", 8192, GPT_4_PROMPT, GPT_4_COMPLETION),
    ModelSpec::new(
        "openai:gpt-4-32k",
        32768,
        GPT_4_32K_PROMPT,
        GPT_4_32K_COMPLETION,
    ),
    ModelSpec::snapshot(
        "openai:gpt-4-32k-0314",
        32768,
        GPT_4_32K_PROMPT,
        GPT_4_32K_COMPLETION,
    ),
    ModelSpec::snapshot(
        "openai:gpt-4-32k-0613",
        32768,
        GPT_4_32K_PROMPT,
        GPT_4_32K_COMPLETION,
    ),
    // Legacy completion models (priced per million tokens)
    ModelSpec::new(
        "openai:text-ada-001",
        2049,
        TokenRate::per_million(0.40),
        TokenRate::per_million(1.60),
    ),
    ModelSpec::new(
        "openai:text-babbage-001",
        2049,
        TokenRate::per_million(0.60),
        TokenRate::per_million(2.40),
    ),
    ModelSpec::new(
        "openai:text-curie-001",
        2049,
        TokenRate::per_million(3.00),
        TokenRate::per_million(12.00),
    ),
    ModelSpec::new(
        "openai:text-davinci-002",
        4097,
        DAVINCI_PROMPT,
        DAVINCI_COMPLETION,
    ),
    ModelSpec::new(
        "openai:text-davinci-003",
        4097,
        DAVINCI_PROMPT,
        DAVINCI_COMPLETION,
    ),
];
