//! Shared runtime plumbing: layered configuration, home directory resolution
//! and tracing initialization.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{AppConfig, LoggingConfig, Section, StorageBackend, StorageConfig};
pub use logging::init_logging_from_config;
