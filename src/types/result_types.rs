use crate::types::storage_types::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success,
    Error,
}

/// Tabular query output: header names plus the matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Outcome of executing one command. At most one of "ok with data" or
/// "ok with message" is produced by a handler; errors always carry a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    status: ResultStatus,
    message: Option<String>,
    data: Option<ResultSet>,
}

impl ExecutionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn success_with_data(data: ResultSet) -> Self {
        Self {
            status: ResultStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn is_error(&self) -> bool {
        self.status == ResultStatus::Error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&ResultSet> {
        self.data.as_ref()
    }
}
