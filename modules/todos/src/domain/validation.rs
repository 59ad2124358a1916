//! Input checks run by the service before any repository call. Pure, no I/O.

use crate::contract::model::{NewTodo, Todo};
use crate::domain::error::DomainError;
use crate::domain::service::ServiceConfig;

pub fn validate_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::invalid_id());
    }
    Ok(())
}

pub fn validate_title(title: &str, max: usize) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::title_empty());
    }
    let len = title.chars().count();
    if len > max {
        return Err(DomainError::title_too_long(len, max));
    }
    Ok(())
}

pub fn validate_description(description: &str, max: usize) -> Result<(), DomainError> {
    let len = description.chars().count();
    if len > max {
        return Err(DomainError::description_too_long(len, max));
    }
    Ok(())
}

pub fn validate_new_todo(new_todo: &NewTodo, config: &ServiceConfig) -> Result<(), DomainError> {
    validate_title(&new_todo.title, config.max_title_length)?;
    if let Some(ref description) = new_todo.description {
        validate_description(description, config.max_description_length)?;
    }
    Ok(())
}

pub fn validate_todo(todo: &Todo, config: &ServiceConfig) -> Result<(), DomainError> {
    validate_id(&todo.id)?;
    validate_title(&todo.title, config.max_title_length)?;
    validate_description(&todo.description, config.max_description_length)?;
    Ok(())
}
