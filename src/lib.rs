//! User Store - A small HTTP service for user records
//!
//! Create, read, update and delete user records kept in a key-value store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::{KeyValueStore, MemoryStore, RedisStore};
