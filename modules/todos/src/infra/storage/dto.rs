use serde::{Deserialize, Serialize};

/// Persisted shape of a to-do: one element of the JSON array under the storage key.
///
/// Timestamps are ISO-8601 strings; a missing due date is written as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStorageDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub created_at: String,
    pub is_completed: bool,
}
