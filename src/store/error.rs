use crate::player::{CoercionError, PlayerField};

/// Errors raised by the player store and its backends.
///
/// A lookup miss is not an error: it surfaces as `None` or `false`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}' in CSV header")]
    MissingColumn(PlayerField),

    #[error("row {row}: invalid value '{value}' for {field}")]
    Parse {
        field: PlayerField,
        row: usize,
        value: String,
    },

    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: PlayerField, value: String },

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field {0} given more than once")]
    DuplicateField(PlayerField),
}

impl StoreError {
    /// Whether the caller supplied bad input (as opposed to a storage failure).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidValue { .. }
                | StoreError::UnknownField(_)
                | StoreError::DuplicateField(_)
        )
    }
}

impl From<CoercionError> for StoreError {
    fn from(err: CoercionError) -> Self {
        StoreError::InvalidValue {
            field: err.field,
            value: err.value,
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
