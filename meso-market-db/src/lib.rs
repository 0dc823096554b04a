//! SQLite persistence layer for the storefront.
//!
//! Provides schema creation, the [`store::StoreBackend`] contract, its
//! embedded SQLite implementation, and the [`service::Storefront`] facade
//! the site code talks to (backed by rusqlite with the bundled feature).

pub mod config;
pub mod schema;
pub mod service;
pub mod sqlite;
pub mod store;

pub use config::{AdminCredentials, ConfigError, StoreConfig};
pub use schema::{open_database, open_memory, SchemaError};
pub use service::Storefront;
pub use sqlite::SqliteStore;
pub use store::{StoreBackend, StoreError};
