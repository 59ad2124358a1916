//! Quick filters: due-date buckets plus completed-item visibility, applied to a loaded list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contract::model::Todo;
use crate::domain::dates::{get_local_today, to_absolute_date, AbsoluteDate};

/// Due-date bucket selected in the quick filter.
///
/// `Overdue`, `Today` and `Upcoming` are mutually exclusive at calendar-day
/// granularity: an item due today is neither overdue nor upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Overdue,
    Today,
    Upcoming,
}

impl FilterType {
    /// Picker order.
    pub const ALL: [FilterType; 4] = [Self::All, Self::Today, Self::Overdue, Self::Upcoming];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
        }
    }

    /// Human-readable label for filter pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Dates",
            Self::Overdue => "Due in the Past",
            Self::Today => "Due Today",
            Self::Upcoming => "Due Later",
        }
    }

    fn retains(self, todo: &Todo, today: AbsoluteDate) -> bool {
        match (self, todo.due_date.map(to_absolute_date)) {
            (Self::All, _) => true,
            (_, None) => false,
            (Self::Overdue, Some(due)) => due < today,
            (Self::Today, Some(due)) => due == today,
            (Self::Upcoming, Some(due)) => due > today,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter type '{0}' (expected all, overdue, today or upcoming)")]
pub struct ParseFilterTypeError(String);

impl FromStr for FilterType {
    type Err = ParseFilterTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(ParseFilterTypeError(other.to_string())),
        }
    }
}

/// Quick filter selection. Defaults to all dates with completed items hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoQuickFilter {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub show_completed: bool,
}

impl TodoQuickFilter {
    pub fn new(filter_type: FilterType, show_completed: bool) -> Self {
        Self {
            filter_type,
            show_completed,
        }
    }
}

/// Apply `filter` against today's local date. The input list is left untouched.
pub fn apply_quick_filter(todos: &[Todo], filter: &TodoQuickFilter) -> Vec<Todo> {
    apply_quick_filter_at(todos, filter, get_local_today())
}

/// Apply `filter` against a fixed `today` snapshot, preserving input order.
pub fn apply_quick_filter_at(
    todos: &[Todo],
    filter: &TodoQuickFilter,
    today: AbsoluteDate,
) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| filter.show_completed || !t.is_completed)
        .filter(|t| filter.filter_type.retains(t, today))
        .cloned()
        .collect()
}
