use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::error::{StoreError, StoreResult};
use crate::db::id::{IdGenerator, UuidGenerator};
use crate::db::models::comment::Comment;
use crate::db::models::post::Post;
use crate::db::models::user::User;
use crate::db::seed;

/// Generator draws tried before giving up on a colliding id.
const MAX_ID_ATTEMPTS: usize = 16;

/// The three collections, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Collections {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Shared handle to the in-memory data. Clones point at the same collections.
///
/// Mutations hold the write guard across validation and append, so checks
/// like email uniqueness cannot race.
#[derive(Clone)]
pub struct Store {
    data: Arc<RwLock<Collections>>,
    ids: Arc<dyn IdGenerator>,
}

impl Store {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_collections(Collections::default(), ids)
    }

    pub fn with_collections(collections: Collections, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            data: Arc::new(RwLock::new(collections)),
            ids,
        }
    }

    /// Store preloaded with the demo records and random ids.
    pub fn seeded() -> Self {
        Self::with_collections(seed::demo_collections(), Arc::new(UuidGenerator))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.data.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.data.write().await
    }

    /// Next generated id that `taken` does not reject. Call while holding the
    /// write guard so the check and the append see the same collection.
    pub fn fresh_id(&self, taken: impl Fn(&str) -> bool) -> StoreResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next();
            if !taken(id.as_str()) {
                return Ok(id);
            }
            tracing::warn!("Generated id {} already in use, drawing another", id);
        }
        Err(StoreError::IdExhausted(MAX_ID_ATTEMPTS))
    }

    pub async fn counts(&self) -> StoreCounts {
        let data = self.read().await;
        StoreCounts {
            users: data.users.len(),
            posts: data.posts.len(),
            comments: data.comments.len(),
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::id::SequentialIds;

    #[tokio::test]
    async fn clones_share_state() {
        let store = Store::new(Arc::new(SequentialIds::new("u")));
        let other = store.clone();

        other.write().await.users.push(User {
            id: other.fresh_id(|_| false).unwrap(),
            name: "Ann".into(),
            email: "ann@mail.com".into(),
            age: None,
        });

        assert_eq!(store.counts().await.users, 1);
        assert_eq!(store.read().await.users[0].id, "u1");
    }

    struct FixedId;

    impl IdGenerator for FixedId {
        fn next(&self) -> String {
            "1".to_string()
        }
    }

    #[test]
    fn fresh_id_skips_taken_ids() {
        let store = Store::new(Arc::new(SequentialIds::new("")));
        let id = store.fresh_id(|id| id == "1" || id == "2").unwrap();
        assert_eq!(id, "3");
    }

    #[test]
    fn fresh_id_gives_up_on_a_stuck_generator() {
        let store = Store::new(Arc::new(FixedId));
        let err = store.fresh_id(|id| id == "1").unwrap_err();
        assert_eq!(err, StoreError::IdExhausted(MAX_ID_ATTEMPTS));
    }

    #[tokio::test]
    async fn seeded_store_counts() {
        let counts = Store::seeded().counts().await;
        assert_eq!(
            counts,
            StoreCounts {
                users: 3,
                posts: 3,
                comments: 4
            }
        );
    }
}
