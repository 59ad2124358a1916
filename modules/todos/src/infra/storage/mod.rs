pub mod dto;
pub mod kv;
pub mod kv_repo;
pub mod mapper;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use kv_repo::KvTodosRepository;
