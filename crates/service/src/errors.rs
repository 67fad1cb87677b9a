use thiserror::Error;

use models::errors::ModelError;

/// Client-supplied data that violates the directory invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name or number missing")]
    MissingField,
    #[error("name must be unique")]
    DuplicateName,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Conflict(_) => Self::Validation(ValidationError::DuplicateName),
            ModelError::Validation(_) => Self::Validation(ValidationError::MissingField),
            ModelError::Db(msg) => Self::Store(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        ModelError::from(err).into()
    }
}
