use thiserror::Error; // Derives `std::error::Error` and `Display` from the attributes below

// Errors raised by the context framework
#[derive(Debug, Error)]
pub enum ContextError {
    // Text handed to `deserialize` is not a canonical value of the context kind
    #[error("parse error in context `{context}`: cannot read {input:?}: {reason}")]
    Parse {
        context: String, // name of the context definition that rejected the text
        input: String,   // the rejected text, verbatim
        reason: String,  // what was expected instead
    },

    // A configuration file could not be read or decoded
    #[error("config error: {0}")]
    Config(String),

    // The tracing subscriber could not be installed
    #[error("logging error: {0}")]
    Logging(String),
}

impl ContextError {
    // Builds a `Parse` error for `input` rejected by the `context` definition
    pub fn parse(context: &str, input: &str, reason: impl Into<String>) -> Self {
        ContextError::Parse {
            context: context.to_string(),
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    // Engines treat parse failures as "context not satisfied" rather than aborting
    pub fn is_parse(&self) -> bool {
        matches!(self, ContextError::Parse { .. })
    }
}

// Type alias for results that use `ContextError` as the error type
pub type Result<T> = std::result::Result<T, ContextError>;
