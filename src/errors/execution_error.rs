use crate::errors::storage_error::StorageError;
use thiserror::Error;

/// Errors raised while constructing an operator tree. Schema and type
/// problems surface here, never across the `next()` boundary.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("table '{0}' not found in catalog")]
    TableNotFound(String),
    #[error("column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },
    #[error("value '{value}' is not a valid integer for column '{column}'")]
    NotAnInteger { column: String, value: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
