use thiserror::Error;

/// Errors raised by the expense form controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Amount field is empty, has no digits, or is zero
    #[error("amount is required")]
    MissingAmount,

    /// Amount digits do not fit in a u64
    #[error("amount is too large: {0}")]
    AmountOverflow(String),

    /// The form already handed its payload to the host
    #[error("form is already closed")]
    AlreadyClosed,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("failed to serialize payload: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        FormError::Serialize(e.to_string())
    }
}
