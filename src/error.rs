use thiserror::Error;

use crate::board::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    ColumnNotFound,
    TaskNotFound,
    AmbiguousRef,
    EmptyName,
    InvalidTags,
    IndexOutOfRange,
    NoDestination,
    ValidationError,
    ConfigError,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::ColumnNotFound => "COLUMN_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidTags => "INVALID_TAGS",
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            Self::NoDestination => "NO_DESTINATION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct BoardError {
    pub code: ErrorCode,
    pub message: String,
}

impl BoardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskboard is not initialized. Run `taskboard init` first.",
        )
    }

    pub fn column_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::ColumnNotFound,
            format!("Column not found: {reference}"),
        )
    }

    pub fn task_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {reference}"),
        )
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl From<rusqlite::Error> for BoardError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<Rejection> for BoardError {
    fn from(r: Rejection) -> Self {
        let code = match r {
            Rejection::EmptyName => ErrorCode::EmptyName,
            Rejection::InvalidTags => ErrorCode::InvalidTags,
            Rejection::ColumnNotFound => ErrorCode::ColumnNotFound,
            Rejection::TaskNotFound => ErrorCode::TaskNotFound,
            Rejection::IndexOutOfRange => ErrorCode::IndexOutOfRange,
            Rejection::NoDestination => ErrorCode::NoDestination,
        };
        Self::new(code, r.to_string())
    }
}
