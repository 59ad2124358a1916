use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodosError {
    #[error("The To-Do's title cannot be empty")]
    TitleEmpty,

    #[error("The id cannot be empty")]
    InvalidId,

    #[error("No To-Do found with the given id: {id}")]
    NotFound { id: String },

    #[error("Duplicate To-Do id found: {id}")]
    DuplicateId { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{message}")]
    Storage { message: String },
}

impl TodosError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
