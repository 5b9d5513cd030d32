use tracing::{info, warn};

use crate::db::error::{StoreError, StoreResult};
use crate::db::models::comment::{Comment, NewComment};
use crate::db::store::Store;

pub async fn list_comments(store: &Store) -> Vec<Comment> {
    store.read().await.comments.clone()
}

pub async fn comments_for_post(store: &Store, post_id: &str) -> Vec<Comment> {
    let data = store.read().await;
    data.comments
        .iter()
        .filter(|comment| comment.post == post_id)
        .cloned()
        .collect()
}

pub async fn comments_by_author(store: &Store, author_id: &str) -> Vec<Comment> {
    let data = store.read().await;
    data.comments
        .iter()
        .filter(|comment| comment.author == author_id)
        .cloned()
        .collect()
}

/// Comments need a known author and a post that exists and is published.
/// An unpublished post is reported exactly like a missing one.
pub async fn create_comment(store: &Store, new_comment: NewComment) -> StoreResult<Comment> {
    let mut data = store.write().await;

    if !data.users.iter().any(|user| user.id == new_comment.author) {
        warn!("❌ createComment rejected, unknown author: {}", new_comment.author);
        return Err(StoreError::UserNotFound(new_comment.author));
    }

    let published = data
        .posts
        .iter()
        .any(|post| post.id == new_comment.post && post.is_published);
    if !published {
        warn!("❌ createComment rejected, no published post: {}", new_comment.post);
        return Err(StoreError::PostNotFound(new_comment.post));
    }

    let id = store.fresh_id(|id| data.comments.iter().any(|existing| existing.id == id))?;
    let comment = new_comment.into_comment(id);
    data.comments.push(comment.clone());
    info!("✅ Created comment {} on post {}", comment.id, comment.post);

    Ok(comment)
}
