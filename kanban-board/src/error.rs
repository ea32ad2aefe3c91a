//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in board operations
///
/// Variants fall into two tiers: addressing failures (something at the
/// requested id or position does not exist) and operational failures
/// (storage, encoding, invalid documents). See [`KanbanError::is_not_found`].
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// No column at the given position
    #[error("column not found at index {index}")]
    ColumnNotFound { index: usize },

    /// No task at the given position in the column
    #[error("task not found at index {index} in column {column}")]
    TaskNotFound { column: usize, index: usize },

    /// No checklist item at the given position in the task
    #[error("checklist item not found at index {index} in task {task} of column {column}")]
    ChecklistItemNotFound {
        column: usize,
        task: usize,
        index: usize,
    },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Data directory is held by another process
    #[error("lock busy - data directory in use by another process")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a board-not-found error
    pub fn board_not_found(id: impl ToString) -> Self {
        Self::BoardNotFound { id: id.to_string() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when the error means an id or position addressed nothing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::ChecklistItemNotFound { .. }
        )
    }
}
