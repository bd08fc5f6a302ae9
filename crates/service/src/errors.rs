use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {field}: {reason}")]
    Validation { field: String, reason: String },
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: i32 },
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), reason: reason.into() }
    }

    pub fn not_found(kind: &'static str, id: i32) -> Self { Self::NotFound { kind, id } }

    /// Offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 1001,
            Self::NotFound { .. } => 1003,
            Self::Storage(_) => 1200,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Storage(e.to_string()) }
}
