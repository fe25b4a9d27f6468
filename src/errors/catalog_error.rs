use thiserror::Error;

/// Failures while loading, validating, or rewriting `catalog.json`.
/// `Corrupt` and `Json` at initialize time are fatal to the caller; the
/// rest surface as command errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog.json is not a valid schema list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupt catalog: {0}")]
    Corrupt(String),
    #[error("table '{0}' is already in the catalog")]
    DuplicateTable(String),
    #[error("table '{0}' is not in the catalog")]
    UnknownTable(String),
}
