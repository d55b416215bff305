use std::fmt;

/// Result type for parley-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Model identifier is not present in the catalog
    UnknownModel(String),

    /// Generation parameter outside its accepted range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Requested max_tokens is larger than the model's context window
    ExceedsModelLimit {
        model: String,
        max_tokens: u64,
        limit: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownModel(model) => write!(f, "Unknown model: {}", model),
            Error::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} must be in range {}..={}, got: {}",
                field, min, max, value
            ),
            Error::ExceedsModelLimit {
                model,
                max_tokens,
                limit,
            } => write!(
                f,
                "max_tokens {} exceeds the {} token limit of {}",
                max_tokens, limit, model
            ),
        }
    }
}

impl std::error::Error for Error {}
