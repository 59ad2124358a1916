use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Storage slot holding the serialized to-do list.
pub const DEFAULT_STORAGE_KEY: &str = "foci-todo-list-storage";

/// Configuration for the todos module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodosConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            max_title_length: default_max_title_length(),
            max_description_length: default_max_description_length(),
        }
    }
}

impl TodosConfig {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_title_length: self.max_title_length,
            max_description_length: self.max_description_length,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_max_title_length() -> usize {
    200
}

fn default_max_description_length() -> usize {
    500
}
