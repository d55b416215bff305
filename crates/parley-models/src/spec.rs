use parley_types::{ModelCost, ModelId, TokenRate};

/// One row of a provider's model table
///
/// `listed` separates selectable options from dated snapshots that stay
/// resolvable for existing chats but are not offered for new ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSpec {
    pub id: &'static str,
    pub max_tokens: u64,
    pub cost: ModelCost,
    pub listed: bool,
}

impl ModelSpec {
    pub const fn new(
        id: &'static str,
        max_tokens: u64,
        prompt: TokenRate,
        completion: TokenRate,
    ) -> Self {
        Self {
            id,
            max_tokens,
            cost: ModelCost::new(prompt, completion),
            listed: true,
        }
    }

    pub const fn snapshot(
        id: &'static str,
        max_tokens: u64,
        prompt: TokenRate,
        completion: TokenRate,
    ) -> Self {
        Self {
            listed: false,
            ..Self::new(id, max_tokens, prompt, completion)
        }
    }

    pub fn model_id(&self) -> ModelId {
        ModelId::new(self.id)
    }
}
