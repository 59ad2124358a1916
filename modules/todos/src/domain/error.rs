use thiserror::Error;

use crate::domain::repo::RepoError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("The To-Do's title cannot be empty")]
    TitleEmpty,

    #[error("Title too long: {len} characters (max: {max})")]
    TitleTooLong { len: usize, max: usize },

    #[error("Description too long: {len} characters (max: {max})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("The id cannot be empty")]
    InvalidId,

    #[error("No To-Do found with the given id: {id}")]
    NotFound { id: String },

    #[error("Duplicate To-Do id found: {id}")]
    DuplicateId { id: String },

    /// Storage and serialization failures, passed through unchanged.
    #[error(transparent)]
    Repository(RepoError),
}

impl DomainError {
    pub fn title_empty() -> Self {
        Self::TitleEmpty
    }

    pub fn title_too_long(len: usize, max: usize) -> Self {
        Self::TitleTooLong { len, max }
    }

    pub fn description_too_long(len: usize, max: usize) -> Self {
        Self::DescriptionTooLong { len, max }
    }

    pub fn invalid_id() -> Self {
        Self::InvalidId
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::DuplicateId { id } => Self::DuplicateId { id },
            other => Self::Repository(other),
        }
    }
}
