use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::contract::model::Todo;
use crate::domain::repo::{RepoError, TodosRepository};
use crate::infra::storage::dto::TodoStorageDto;
use crate::infra::storage::kv::KeyValueStore;
use crate::infra::storage::mapper::{dto_to_entity, entity_to_dto};

/// Repository storing the whole to-do list as one JSON array under a single key.
///
/// Every operation reads the full list, scans it by id, and writes the full
/// list back when it changed. The read-modify-write cycle is not atomic:
/// concurrent mutating callers can overwrite each other, so mutations must be
/// serialized by the caller. Suited to small, single-writer lists.
#[derive(Clone)]
pub struct KvTodosRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KvTodosRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Vec<TodoStorageDto>, RepoError> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, dtos: &[TodoStorageDto]) -> Result<(), RepoError> {
        let raw = serde_json::to_string(dtos)?;
        self.store.set(&self.key, raw).await?;
        debug!(count = dtos.len(), "Saved to-do list");
        Ok(())
    }
}

fn position_of(dtos: &[TodoStorageDto], id: &str) -> Option<usize> {
    dtos.iter().position(|dto| dto.id == id)
}

#[async_trait]
impl TodosRepository for KvTodosRepository {
    #[instrument(name = "todos.repo.create_todo", skip(self, todo), fields(todo_id = %todo.id))]
    async fn create_todo(&self, todo: Todo) -> Result<Todo, RepoError> {
        let mut dtos = self.load().await?;
        if position_of(&dtos, &todo.id).is_some() {
            return Err(RepoError::duplicate_id(todo.id));
        }

        dtos.push(entity_to_dto(&todo));
        self.save(&dtos).await?;
        Ok(todo)
    }

    #[instrument(name = "todos.repo.read_todo_list", skip(self))]
    async fn read_todo_list(&self) -> Result<Vec<Todo>, RepoError> {
        self.load()
            .await?
            .into_iter()
            .map(dto_to_entity)
            .collect()
    }

    #[instrument(name = "todos.repo.read_todo_by_id", skip(self))]
    async fn read_todo_by_id(&self, id: &str) -> Result<Option<Todo>, RepoError> {
        let mut dtos = self.load().await?;
        match position_of(&dtos, id) {
            Some(idx) => dto_to_entity(dtos.swap_remove(idx)).map(Some),
            None => Ok(None),
        }
    }

    #[instrument(name = "todos.repo.update", skip(self, todo), fields(todo_id = %todo.id))]
    async fn update(&self, todo: Todo) -> Result<Option<Todo>, RepoError> {
        let mut dtos = self.load().await?;
        let Some(idx) = position_of(&dtos, &todo.id) else {
            return Ok(None);
        };

        dtos[idx] = entity_to_dto(&todo);
        self.save(&dtos).await?;
        Ok(Some(todo))
    }

    #[instrument(name = "todos.repo.delete", skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut dtos = self.load().await?;
        let Some(idx) = position_of(&dtos, id) else {
            return Ok(false);
        };

        dtos.remove(idx);
        self.save(&dtos).await?;
        Ok(true)
    }
}
