pub mod chat;
pub mod code_languages;
pub mod error;
pub mod model;
pub mod pricing;

pub use chat::*;
pub use code_languages::{CODE_LANGUAGE_SUBSET, is_supported_code_language};
pub use error::{Error, Result};
pub use model::*;
pub use pricing::*;
