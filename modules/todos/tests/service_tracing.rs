//! Tests to verify that the service layer emits expected tracing spans and events

mod common;

use std::sync::Arc;
use tracing_test::traced_test;

use common::{todo, MockTodosRepository};
use todos::contract::model::NewTodo;
use todos::domain::service::{Service, ServiceConfig};

fn service(repo: MockTodosRepository) -> Service {
    Service::new(Arc::new(repo), ServiceConfig::default())
}

#[traced_test]
#[tokio::test]
async fn create_todo_emits_spans() {
    let service = service(MockTodosRepository::new());

    let created = service.create_todo(NewTodo::new("Water plants")).await;

    assert!(created.is_ok());
    assert!(logs_contain("todos.service.create_todo"));
    assert!(logs_contain("Creating new to-do"));
    assert!(logs_contain("Successfully created to-do"));
}

#[traced_test]
#[tokio::test]
async fn get_todo_by_id_records_the_id() {
    let service = service(MockTodosRepository::with_todos(vec![todo("t-42", "Answer")]));

    let found = service.get_todo_by_id("t-42").await;

    assert!(found.is_ok());
    assert!(logs_contain("todos.service.get_todo_by_id"));
    assert!(logs_contain("todo_id=t-42"));
}

#[traced_test]
#[tokio::test]
async fn get_todo_list_logs_count() {
    let repo = MockTodosRepository::with_todos(vec![todo("a", "A"), todo("b", "B")]);

    let list = service(repo).get_todo_list().await;

    assert!(list.is_ok());
    assert!(logs_contain("Successfully listed 2 to-dos"));
}

#[traced_test]
#[tokio::test]
async fn failed_update_does_not_log_success() {
    let service = service(MockTodosRepository::new());

    let result = service.update_todo(todo("ghost", "Nobody home")).await;

    assert!(result.is_err());
    assert!(logs_contain("Updating to-do"));
    assert!(!logs_contain("Successfully updated to-do"));
}

#[traced_test]
#[tokio::test]
async fn delete_todo_emits_spans() {
    let service = service(MockTodosRepository::with_todos(vec![todo("t-1", "Bye")]));

    let result = service.delete_todo("t-1").await;

    assert!(result.is_ok());
    assert!(logs_contain("todos.service.delete_todo"));
    assert!(logs_contain("Successfully deleted to-do"));
}
