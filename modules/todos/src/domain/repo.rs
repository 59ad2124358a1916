use async_trait::async_trait;
use thiserror::Error;

use crate::contract::model::Todo;

/// Failures reported by a [`TodosRepository`].
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Duplicate To-Do id found: {id}")]
    DuplicateId { id: String },

    /// Parser details are carried as the source.
    #[error("Malformed To-Do storage")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid timestamp in field '{field}': '{value}'")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Failure of the underlying store (I/O and the like).
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl RepoError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// "Not found" is never an error here: lookups return `None` and deletes `false`.
#[async_trait]
pub trait TodosRepository: Send + Sync {
    /// Persist a fully-formed to-do and return it unchanged.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    /// Fails with [`RepoError::DuplicateId`] when the id is taken.
    async fn create_todo(&self, todo: Todo) -> Result<Todo, RepoError>;
    /// All stored to-dos, empty when none.
    async fn read_todo_list(&self) -> Result<Vec<Todo>, RepoError>;
    /// Load a to-do by id.
    async fn read_todo_by_id(&self, id: &str) -> Result<Option<Todo>, RepoError>;
    /// Replace the stored to-do with the same id. `None` if no such to-do exists.
    async fn update(&self, todo: Todo) -> Result<Option<Todo>, RepoError>;
    /// Delete by id. Returns true if a to-do was removed.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}
