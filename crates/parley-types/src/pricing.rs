use serde::{Deserialize, Serialize};

/// Price charged for every `unit` tokens
///
/// `unit` is the token-count denominator the price applies to, usually
/// 1,000 or 1,000,000. Both fields are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenRate {
    pub price: f64,
    pub unit: u64,
}

impl TokenRate {
    pub const fn new(price: f64, unit: u64) -> Self {
        Self { price, unit }
    }

    pub const fn per_thousand(price: f64) -> Self {
        Self::new(price, 1_000)
    }

    pub const fn per_million(price: f64) -> Self {
        Self::new(price, 1_000_000)
    }

    /// Cost of `tokens` tokens at this rate
    pub fn cost(&self, tokens: u64) -> f64 {
        self.price * tokens as f64 / self.unit as f64
    }

    /// Price normalized to a single token
    pub fn price_per_token(&self) -> f64 {
        self.price / self.unit as f64
    }
}

/// Prompt and completion rates for one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelCost {
    pub prompt: TokenRate,
    pub completion: TokenRate,
}

impl ModelCost {
    pub const fn new(prompt: TokenRate, completion: TokenRate) -> Self {
        Self { prompt, completion }
    }

    pub fn estimate(&self, prompt_tokens: u64, completion_tokens: u64) -> CostEstimate {
        let prompt = self.prompt.cost(prompt_tokens);
        let completion = self.completion.cost(completion_tokens);
        CostEstimate {
            prompt_tokens,
            completion_tokens,
            prompt,
            completion,
            total: prompt + completion,
        }
    }
}

/// Cost of a prompt/completion token pair, in the catalog's currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub prompt: f64,
    pub completion: f64,
    pub total: f64,
}
