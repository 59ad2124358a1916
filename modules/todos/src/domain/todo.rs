use chrono::{DateTime, Local, TimeZone, Utc};

use crate::contract::model::Todo;
use crate::domain::dates::{local_today_in, to_absolute_date, AbsoluteDate};

/// An incomplete to-do whose due date lies on an earlier calendar day than `now` (local time).
pub fn is_overdue(todo: &Todo, now: DateTime<Utc>) -> bool {
    is_overdue_in(todo, now, &Local)
}

/// [`is_overdue`] with an explicit observer timezone.
pub fn is_overdue_in<Tz: TimeZone>(todo: &Todo, now: DateTime<Utc>, tz: &Tz) -> bool {
    if todo.is_completed {
        return false;
    }
    match todo.due_date {
        Some(due) => to_absolute_date(due) < local_today_in(now, tz),
        None => false,
    }
}

/// An incomplete to-do due exactly on `today`.
///
/// Pass [`crate::domain::dates::get_local_today`] for the current day.
pub fn is_due_today(todo: &Todo, today: AbsoluteDate) -> bool {
    if todo.is_completed {
        return false;
    }
    todo.due_date.is_some_and(|due| to_absolute_date(due) == today)
}

/// Due-date state of a to-do as shown on its badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    NoDueDate,
    Overdue,
    DueToday,
    /// Has a due date that is neither past nor today, or the item is already completed.
    Scheduled,
}

impl DueStatus {
    /// Overdue and due-today items get the emphasized badge.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Overdue | Self::DueToday)
    }
}

/// Classify a to-do for display, evaluated against one `now` snapshot.
pub fn due_status<Tz: TimeZone>(todo: &Todo, now: DateTime<Utc>, tz: &Tz) -> DueStatus {
    if todo.due_date.is_none() {
        return DueStatus::NoDueDate;
    }
    if is_overdue_in(todo, now, tz) {
        return DueStatus::Overdue;
    }
    if is_due_today(todo, local_today_in(now, tz)) {
        return DueStatus::DueToday;
    }
    DueStatus::Scheduled
}
