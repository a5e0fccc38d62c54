//! MongoDB-backed store
//!
//! Two collections: `posts`, keyed publicly by `sequential_id`, and
//! `counters`, a singleton document tracking the next sequential id.
//! Counter bumps are a single find-and-modify, so concurrent creations
//! cannot observe the same value.

use async_trait::async_trait;
use chrono::Local;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use super::{PostStore, StoreError};
use crate::models::{Post, PostDraft, PostPatch};

const POSTS_COLLECTION: &str = "posts";
const COUNTERS_COLLECTION: &str = "counters";

/// Singleton counter document
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    count: i64,
}

/// MongoDB store
#[derive(Debug, Clone)]
pub struct MongoStore {
    posts: Collection<Post>,
    counters: Collection<Counter>,
}

impl MongoStore {
    /// Connect to a MongoDB deployment and bind the two collections.
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        Ok(Self::new(client.database(database)))
    }

    /// Build a store over an existing database handle.
    pub fn new(db: Database) -> Self {
        Self {
            posts: db.collection(POSTS_COLLECTION),
            counters: db.collection(COUNTERS_COLLECTION),
        }
    }

    /// Atomically increment the singleton counter and return the new
    /// value. The upsert creates `{count: 1}` on first use, so the first
    /// post is number 1. The counter is never decremented or deleted.
    async fn next_sequential_id(&self) -> Result<i64, StoreError> {
        let counter = self
            .counters
            .find_one_and_update(doc! {}, doc! { "$inc": { "count": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        // Upsert + return-after always yields a document.
        counter
            .map(|c| c.count)
            .ok_or(StoreError::CounterUnavailable)
    }
}

#[async_trait]
impl PostStore for MongoStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let cursor = self.posts.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, id: i64) -> Result<Post, StoreError> {
        self.posts
            .find_one(doc! { "sequential_id": id })
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let id = self.next_sequential_id().await?;
        let post = Post::from_draft(id, draft, Local::now().date_naive());

        self.posts.insert_one(&post).await?;
        tracing::info!(sequential_id = id, "post saved");

        Ok(post)
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, StoreError> {
        let mut post = self.get(id).await?;
        patch.apply(&mut post);

        self.posts
            .replace_one(doc! { "sequential_id": id }, &post)
            .await?;

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = self.posts.delete_one(doc! { "sequential_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound { id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real MongoDB deployment
    // Run with: MONGODB_URL=mongodb://... cargo test -p newsdesk-server -- --ignored

    async fn test_store() -> MongoStore {
        let url = std::env::var("MONGODB_URL").expect("MONGODB_URL required");
        MongoStore::connect(&url, "newsdesk_test")
            .await
            .expect("connect failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn counter_hands_out_increasing_ids() {
        let store = test_store().await;

        let first = store.next_sequential_id().await.expect("counter bump failed");
        let second = store.next_sequential_id().await.expect("counter bump failed");

        assert!(second > first);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_delete_roundtrip() {
        let store = test_store().await;

        let post = store
            .create(PostDraft {
                banner_image: "banner.png".into(),
                title: "Roundtrip".into(),
                content: "body".into(),
            })
            .await
            .expect("create failed");

        let fetched = store.get(post.sequential_id).await.expect("get failed");
        assert_eq!(fetched, post);

        store.delete(post.sequential_id).await.expect("delete failed");
        assert!(matches!(
            store.get(post.sequential_id).await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
