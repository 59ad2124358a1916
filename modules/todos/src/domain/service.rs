use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewTodo, Todo};
use crate::domain::error::DomainError;
use crate::domain::repo::TodosRepository;
use crate::domain::validation;

/// Domain service holding the to-do use cases.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn TodosRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_description_length: 500,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn TodosRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[instrument(
        name = "todos.service.create_todo",
        skip(self, new_todo),
        fields(title = %new_todo.title)
    )]
    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, DomainError> {
        info!("Creating new to-do");

        validation::validate_new_todo(&new_todo, &self.config)?;

        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: new_todo.title,
            description: new_todo.description.unwrap_or_default(),
            due_date: new_todo.due_date,
            created_at: Utc::now(),
            is_completed: new_todo.is_completed.unwrap_or(false),
        };

        let created = self.repo.create_todo(todo).await?;

        info!("Successfully created to-do with id={}", created.id);
        Ok(created)
    }

    #[instrument(name = "todos.service.get_todo_by_id", skip(self), fields(todo_id = %id))]
    pub async fn get_todo_by_id(&self, id: &str) -> Result<Todo, DomainError> {
        debug!("Getting to-do by id");

        validation::validate_id(id)?;

        let todo = self
            .repo
            .read_todo_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        debug!("Successfully retrieved to-do");
        Ok(todo)
    }

    #[instrument(name = "todos.service.get_todo_list", skip(self))]
    pub async fn get_todo_list(&self) -> Result<Vec<Todo>, DomainError> {
        debug!("Listing to-dos");

        let todos = self.repo.read_todo_list().await?;

        debug!("Successfully listed {} to-dos", todos.len());
        Ok(todos)
    }

    #[instrument(name = "todos.service.update_todo", skip(self, todo), fields(todo_id = %todo.id))]
    pub async fn update_todo(&self, todo: Todo) -> Result<Todo, DomainError> {
        info!("Updating to-do");

        validation::validate_todo(&todo, &self.config)?;

        let id = todo.id.clone();
        let updated = self
            .repo
            .update(todo)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        info!("Successfully updated to-do");
        Ok(updated)
    }

    #[instrument(name = "todos.service.delete_todo", skip(self), fields(todo_id = %id))]
    pub async fn delete_todo(&self, id: &str) -> Result<(), DomainError> {
        info!("Deleting to-do");

        validation::validate_id(id)?;

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found(id));
        }

        info!("Successfully deleted to-do");
        Ok(())
    }
}
