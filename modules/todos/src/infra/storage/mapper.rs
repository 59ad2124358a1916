use chrono::{DateTime, SecondsFormat, Utc};

use crate::contract::model::Todo;
use crate::domain::repo::RepoError;
use crate::infra::storage::dto::TodoStorageDto;

/// Convert a contract model to its storage DTO
pub fn entity_to_dto(todo: &Todo) -> TodoStorageDto {
    TodoStorageDto {
        id: todo.id.clone(),
        title: todo.title.clone(),
        description: todo.description.clone(),
        due_date: todo.due_date.as_ref().map(format_timestamp),
        created_at: format_timestamp(&todo.created_at),
        is_completed: todo.is_completed,
    }
}

/// Convert a storage DTO back to a contract model
pub fn dto_to_entity(dto: TodoStorageDto) -> Result<Todo, RepoError> {
    let due_date = match dto.due_date {
        Some(raw) => Some(parse_timestamp("dueDate", raw)?),
        None => None,
    };
    let created_at = parse_timestamp("createdAt", dto.created_at)?;

    Ok(Todo {
        id: dto.id,
        title: dto.title,
        description: dto.description,
        due_date,
        created_at,
        is_completed: dto.is_completed,
    })
}

// Sub-second digits only when present, so whole-second instants stay short
// and nothing is lost on the way back.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(field: &'static str, raw: String) -> Result<DateTime<Utc>, RepoError> {
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(source) => Err(RepoError::InvalidTimestamp {
            field,
            value: raw,
            source,
        }),
    }
}
