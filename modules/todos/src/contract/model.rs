use chrono::{DateTime, Utc};

/// Pure to-do model for inter-module communication (no serde; storage owns its own DTO)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Only the calendar date is meaningful; time-of-day is ignored by comparisons.
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_completed: bool,
}

/// Data for creating a new to-do. Id and creation time are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: Option<bool>,
}

impl NewTodo {
    /// Title only; every other field takes its default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            is_completed: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }
}
