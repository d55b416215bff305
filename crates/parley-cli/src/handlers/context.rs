use crate::presentation::{CommandResultViewModel, ConsoleRenderer};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }
}
