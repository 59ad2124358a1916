use async_trait::async_trait;

use crate::contract::model::{NewTodo, Todo};

/// Public API trait for the todos module that other modules (and the UI layer) can use.
///
/// Failures are `anyhow::Error` values wrapping [`crate::contract::error::TodosError`].
#[async_trait]
pub trait TodosApi: Send + Sync {
    /// Create a to-do; id and creation time are generated
    async fn create_todo(&self, new_todo: NewTodo) -> anyhow::Result<Todo>;

    /// Get a to-do by id
    async fn get_todo_by_id(&self, id: &str) -> anyhow::Result<Todo>;

    /// List every stored to-do in storage order
    async fn get_todo_list(&self) -> anyhow::Result<Vec<Todo>>;

    /// Replace a stored to-do (matched by `todo.id`)
    async fn update_todo(&self, todo: Todo) -> anyhow::Result<Todo>;

    /// Delete a to-do by id
    async fn delete_todo(&self, id: &str) -> anyhow::Result<()>;
}
