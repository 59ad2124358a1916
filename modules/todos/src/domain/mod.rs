pub mod dates;
pub mod error;
pub mod filters;
pub mod repo;
pub mod service;
pub mod todo;
pub mod validation;
