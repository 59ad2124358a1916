mod common;

use std::sync::Arc;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use common::todo;
use todos::domain::repo::{RepoError, TodosRepository};
use todos::infra::storage::{FileStore, KeyValueStore, KvTodosRepository, MemoryStore};

const KEY: &str = "todo-list";

/// The whole repository contract, run against any store.
async fn exercise_repository(repo: &KvTodosRepository) -> Result<()> {
    // List should be empty at first
    assert!(repo.read_todo_list().await?.is_empty());

    let t1 = todo("todo-1", "New To-Do 1");
    let t2 = todo("todo-2", "New To-Do 2");

    // Create two to-dos; the duplicate is refused
    assert_eq!(repo.create_todo(t1.clone()).await?, t1);
    let dup = repo.create_todo(t1.clone()).await;
    assert!(matches!(dup, Err(RepoError::DuplicateId { ref id }) if id == "todo-1"));
    assert_eq!(repo.create_todo(t2.clone()).await?, t2);
    assert_eq!(repo.read_todo_list().await?.len(), 2);

    // Read by id
    assert_eq!(repo.read_todo_by_id("todo-1").await?, Some(t1.clone()));
    assert_eq!(repo.read_todo_by_id("todo-2").await?, Some(t2.clone()));
    assert_eq!(repo.read_todo_by_id("non-existent").await?, None);

    // Delete once, then the id is gone
    assert!(repo.delete("todo-1").await?);
    assert!(!repo.delete("todo-1").await?);
    assert_eq!(repo.read_todo_by_id("todo-1").await?, None);
    assert_eq!(repo.read_todo_list().await?.len(), 1);

    // Update the remaining to-do
    let mut t2_updated = t2.clone();
    t2_updated.due_date = Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
    t2_updated.description = "with a due date".to_string();
    assert_eq!(repo.update(t2_updated.clone()).await?, Some(t2_updated.clone()));
    assert_eq!(repo.read_todo_by_id("todo-2").await?, Some(t2_updated));
    assert_eq!(repo.read_todo_list().await?.len(), 1);

    // Updating a to-do that no longer exists neither fails nor inserts
    let mut t1_updated = t1;
    t1_updated.is_completed = true;
    assert_eq!(repo.update(t1_updated).await?, None);
    assert_eq!(repo.read_todo_list().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn memory_backed_repository_end_to_end() -> Result<()> {
    let repo = KvTodosRepository::new(Arc::new(MemoryStore::new()), KEY);
    exercise_repository(&repo).await
}

#[tokio::test]
async fn file_backed_repository_end_to_end() -> Result<()> {
    let tmp = tempdir()?;
    let store = FileStore::open(tmp.path()).await?;
    let repo = KvTodosRepository::new(Arc::new(store), KEY);
    exercise_repository(&repo).await
}

#[tokio::test]
async fn file_store_survives_reopen() -> Result<()> {
    let tmp = tempdir()?;
    {
        let repo = KvTodosRepository::new(Arc::new(FileStore::open(tmp.path()).await?), KEY);
        repo.create_todo(todo("kept", "Persisted")).await?;
    }

    let repo = KvTodosRepository::new(Arc::new(FileStore::open(tmp.path()).await?), KEY);
    let list = repo.read_todo_list().await?;
    assert_eq!(list, vec![todo("kept", "Persisted")]);
    Ok(())
}

#[tokio::test]
async fn stores_are_independent_per_key_and_handle() -> Result<()> {
    let shared = MemoryStore::new();
    let work = KvTodosRepository::new(Arc::new(shared.clone()), "work");
    let home = KvTodosRepository::new(Arc::new(shared.clone()), "home");
    let other = KvTodosRepository::new(Arc::new(MemoryStore::new()), "work");

    work.create_todo(todo("w", "Work item")).await?;

    assert_eq!(work.read_todo_list().await?.len(), 1);
    assert!(home.read_todo_list().await?.is_empty());
    assert!(other.read_todo_list().await?.is_empty());
    assert_eq!(work.key(), "work");
    Ok(())
}

#[tokio::test]
async fn reads_lists_written_by_other_clients() -> Result<()> {
    // Millisecond timestamps and explicit nulls, as a browser client writes them.
    let store = MemoryStore::new();
    store
        .set(
            KEY,
            r#"[
                {"id":"a","title":"From browser","description":"","dueDate":"2026-01-01T00:00:00.000Z",
                 "createdAt":"2025-12-30T10:15:00.250Z","isCompleted":false},
                {"id":"b","title":"No date","description":"x","dueDate":null,
                 "createdAt":"2025-12-30T10:16:00.000Z","isCompleted":true}
            ]"#
            .to_string(),
        )
        .await?;

    let repo = KvTodosRepository::new(Arc::new(store), KEY);
    let list = repo.read_todo_list().await?;

    assert_eq!(list.len(), 2);
    assert_eq!(
        list[0].due_date,
        Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(list[0].created_at.timestamp_subsec_millis(), 250);
    assert_eq!(list[1].due_date, None);
    assert!(list[1].is_completed);
    Ok(())
}
