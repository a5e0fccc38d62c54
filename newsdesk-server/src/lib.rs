//! newsdesk-server: HTTP API for news posts
//!
//! Exposes CRUD endpoints for news posts over a document store and
//! assigns each post a human-readable sequential number from a
//! persisted counter.

pub mod http;
pub mod models;
pub mod store;

pub use http::{run_server, ApiError, ServerConfig};
pub use store::{MemoryStore, MongoStore, PostStore, StoreError};
