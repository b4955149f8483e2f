use crate::model::{ActivityId, ValidationError};

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file could not be set up.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Errors raised by the activity form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The active id does not match any activity in the list.
    #[error("no activity with id {0}")]
    UnknownActivity(ActivityId),

    /// Raw input could not be coerced into the field's type.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
