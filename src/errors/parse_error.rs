use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated quoted identifier")]
    UnterminatedIdentifier,
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("unknown data type '{0}'")]
    UnknownDatatype(String),
    #[error("duplicate column '{0}' in insert column list")]
    DuplicateColumn(String),
    #[error("unrecognized command")]
    UnrecognizedCommand,
    #[error("trailing input after statement: {0}")]
    TrailingInput(String),
}
