//! In-memory store for tests
//!
//! Mirrors the Mongo store's guarantees: sequential ids come from an
//! atomic counter, are never reused, and stay unique under concurrent
//! creation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::Mutex;

use super::{PostStore, StoreError};
use crate::models::{Post, PostDraft, PostPatch};

/// Test-double store backed by a map keyed by sequential id
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: Mutex<BTreeMap<i64, Post>>,
    counter: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.lock().await.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Post, StoreError> {
        self.posts
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let post = Post::from_draft(id, draft, Local::now().date_naive());

        self.posts.lock().await.insert(id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, StoreError> {
        let mut posts = self.posts.lock().await;
        let post = posts.get_mut(&id).ok_or(StoreError::NotFound { id })?;

        patch.apply(post);

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.posts
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
