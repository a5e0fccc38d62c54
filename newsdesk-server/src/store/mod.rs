//! Store layer - post persistence and sequential numbering
//!
//! Handlers depend on the `PostStore` trait only. `MongoStore` is the
//! production implementation; `MemoryStore` is a test double with the
//! same numbering guarantees.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;

use crate::models::{Post, PostDraft, PostPatch};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("post {id} not found")]
    NotFound { id: i64 },

    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("sequence counter unavailable")]
    CounterUnavailable,
}

/// Persistence operations for posts.
///
/// Implementations own sequential-id assignment: `create` must hand out
/// strictly increasing ids with no duplicates, including under
/// concurrent calls, and a deleted id is never reassigned.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every post, storage order. No pagination.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Look up a post by its sequential id.
    async fn get(&self, id: i64) -> Result<Post, StoreError>;

    /// Assign the next sequential id, stamp the creation date, persist.
    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Load by sequential id, apply the patch, persist. Fields the patch
    /// leaves untouched keep their stored values.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, StoreError>;

    /// Remove a post by its sequential id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
