use crate::handlers::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::LanguageListViewModel;
use crate::types::OutputFormat;
use anyhow::Result;
use parley_types::CODE_LANGUAGE_SUBSET;

pub fn list(format: OutputFormat) -> Result<()> {
    HandlerContext::new(format).render(CommandResultViewModel::new(LanguageListViewModel {
        languages: CODE_LANGUAGE_SUBSET.to_vec(),
    }))
}
