use tracing::{info, warn};

use crate::db::error::{StoreError, StoreResult};
use crate::db::models::post::{NewPost, Post};
use crate::db::queries::{active_filter, contains_lowered};
use crate::db::store::Store;

/// All posts, or those whose title or body contains `query`.
pub async fn list_posts(store: &Store, query: Option<&str>) -> Vec<Post> {
    let data = store.read().await;
    match active_filter(query) {
        None => data.posts.clone(),
        Some(q) => {
            let needle = q.to_lowercase();
            data.posts
                .iter()
                .filter(|post| {
                    contains_lowered(&post.title, &needle) || contains_lowered(&post.body, &needle)
                })
                .cloned()
                .collect()
        }
    }
}

pub async fn find_post(store: &Store, id: &str) -> Option<Post> {
    let data = store.read().await;
    data.posts.iter().find(|post| post.id == id).cloned()
}

/// Posts written by `author_id`.
pub async fn posts_by_author(store: &Store, author_id: &str) -> Vec<Post> {
    let data = store.read().await;
    data.posts
        .iter()
        .filter(|post| post.author == author_id)
        .cloned()
        .collect()
}

/// The author must be an existing user.
pub async fn create_post(store: &Store, new_post: NewPost) -> StoreResult<Post> {
    let mut data = store.write().await;

    if !data.users.iter().any(|user| user.id == new_post.author) {
        warn!("❌ createPost rejected, unknown author: {}", new_post.author);
        return Err(StoreError::UserNotFound(new_post.author));
    }

    let id = store.fresh_id(|id| data.posts.iter().any(|existing| existing.id == id))?;
    let post = new_post.into_post(id);
    data.posts.push(post.clone());
    info!("✅ Created post {} by {}", post.id, post.author);

    Ok(post)
}
