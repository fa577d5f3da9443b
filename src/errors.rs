use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Everything that can go wrong while building a render context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    // A style name outside display/text/script/scriptscript
    #[error("invalid style: {0:?}")]
    InvalidStyle(String),

    // A size step outside the closed 1..=10 range
    #[error("invalid size: {0} (expected {min}..={max})", min = crate::Size::MIN.get(), max = crate::Size::MAX.get())]
    InvalidSize(i64),

    // A configuration document that could not be decoded
    #[error("config error: {0}")]
    Config(String),

    // A derivation step on the command line that does not parse
    #[error("invalid operation: {0:?}")]
    InvalidOperation(String),
}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        ContextError::Config(err.to_string())
    }
}

// Type alias for results that use `ContextError` as the error type
pub type Result<T> = std::result::Result<T, ContextError>;
