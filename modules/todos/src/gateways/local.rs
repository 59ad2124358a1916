use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::TodosApi,
    error::TodosError,
    model::{NewTodo, Todo},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the TodosApi trait that delegates to the domain service
pub struct TodosLocalClient {
    service: Arc<Service>,
}

impl TodosLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TodosApi for TodosLocalClient {
    async fn create_todo(&self, new_todo: NewTodo) -> anyhow::Result<Todo> {
        self.service
            .create_todo(new_todo)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn get_todo_by_id(&self, id: &str) -> anyhow::Result<Todo> {
        self.service
            .get_todo_by_id(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn get_todo_list(&self) -> anyhow::Result<Vec<Todo>> {
        self.service
            .get_todo_list()
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_todo(&self, todo: Todo) -> anyhow::Result<Todo> {
        self.service
            .update_todo(todo)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_todo(&self, id: &str) -> anyhow::Result<()> {
        self.service
            .delete_todo(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::TitleEmpty => TodosError::TitleEmpty,
        DomainError::InvalidId => TodosError::InvalidId,
        DomainError::NotFound { id } => TodosError::not_found(id),
        DomainError::DuplicateId { id } => TodosError::duplicate_id(id),
        e @ (DomainError::TitleTooLong { .. } | DomainError::DescriptionTooLong { .. }) => {
            TodosError::validation(e.to_string())
        }
        // Storage failures keep their message verbatim.
        DomainError::Repository(e) => TodosError::storage(format!("{:#}", anyhow::Error::new(e))),
    };

    anyhow::Error::new(contract_error)
}
