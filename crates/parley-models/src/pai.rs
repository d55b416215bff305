use crate::spec::ModelSpec;
use parley_types::TokenRate;

// PAI ids carry no provider prefix.
const PAI_PROMPT: TokenRate = TokenRate::per_thousand(0.06);
const PAI_COMPLETION: TokenRate = TokenRate::per_thousand(0.12);

pub(crate) const MODEL_SPECS: &[ModelSpec] = &[
    ModelSpec::new("pai-001-beta", 4096, PAI_PROMPT, PAI_COMPLETION),
    ModelSpec::new("pai-001-light-beta", 4096, PAI_PROMPT, PAI_COMPLETION),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::test_support::{assert_no_duplicate_ids, assert_positive};

    #[test]
    fn test_no_duplicate_ids() {
        assert_no_duplicate_ids(MODEL_SPECS);
    }

    #[test]
    fn test_all_values_positive() {
        assert_positive(MODEL_SPECS);
    }

    #[test]
    fn test_ids_are_unqualified() {
        for spec in MODEL_SPECS {
            assert_eq!(spec.model_id().provider(), None);
        }
    }
}
