#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use todos::contract::model::Todo;
use todos::domain::repo::{RepoError, TodosRepository};

/// A to-do with fixed timestamps; tests override the fields they care about.
pub fn todo(id: &str, title: &str) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        due_date: None,
        created_at: Utc.with_ymd_and_hms(2025, 12, 1, 8, 0, 0).unwrap(),
        is_completed: false,
    }
}

/// Every repository call the service made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    List,
    Read(String),
    Update(String),
    Delete(String),
}

/// Vec-backed repository that records calls and can be told to fail.
#[derive(Clone, Default)]
pub struct MockTodosRepository {
    pub todos: Arc<Mutex<Vec<Todo>>>,
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub fail_with: Arc<Mutex<Option<RepoError>>>,
}

impl MockTodosRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let repo = Self::default();
        *repo.todos.lock() = todos;
        repo
    }

    /// Fail the next call with a store error carrying `message`.
    pub fn fail_next(&self, message: &str) {
        self.fail_next_with(RepoError::Store(anyhow::anyhow!(message.to_string())));
    }

    /// Fail the next call with `err`, whatever the call is.
    pub fn fail_next_with(&self, err: RepoError) {
        *self.fail_with.lock() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> Result<(), RepoError> {
        self.calls.lock().push(call);
        match self.fail_with.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodosRepository for MockTodosRepository {
    async fn create_todo(&self, todo: Todo) -> Result<Todo, RepoError> {
        self.record(Call::Create(todo.id.clone()))?;
        let mut todos = self.todos.lock();
        if todos.iter().any(|t| t.id == todo.id) {
            return Err(RepoError::duplicate_id(todo.id));
        }
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn read_todo_list(&self) -> Result<Vec<Todo>, RepoError> {
        self.record(Call::List)?;
        Ok(self.todos.lock().clone())
    }

    async fn read_todo_by_id(&self, id: &str) -> Result<Option<Todo>, RepoError> {
        self.record(Call::Read(id.to_string()))?;
        Ok(self.todos.lock().iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, todo: Todo) -> Result<Option<Todo>, RepoError> {
        self.record(Call::Update(todo.id.clone()))?;
        let mut todos = self.todos.lock();
        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo.clone();
                Ok(Some(todo))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        self.record(Call::Delete(id.to_string()))?;
        let mut todos = self.todos.lock();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() != before)
    }
}
