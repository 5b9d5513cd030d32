use async_graphql::{ComplexObject, Context, ErrorExtensions, Object, Result, SimpleObject, ID};

use crate::db::error::StoreError;
use crate::db::models::comment::Comment;
use crate::db::models::post::Post;
use crate::db::models::user::User;
use crate::db::queries::comment::{comments_by_author, comments_for_post, list_comments};
use crate::db::queries::post::{find_post, list_posts, posts_by_author};
use crate::db::queries::user::{find_user, list_users};
use crate::db::store::Store;

#[derive(SimpleObject, Clone)]
#[graphql(name = "User", complex, rename_args = "camelCase")]
pub struct UserGQL {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Post", complex, rename_args = "camelCase")]
pub struct PostGQL {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub is_published: bool,
    #[graphql(skip)]
    pub author_id: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Comment", complex, rename_args = "camelCase")]
pub struct CommentGQL {
    pub id: ID,
    pub text: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub post_id: String,
}

impl From<User> for UserGQL {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id),
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

impl From<Post> for PostGQL {
    fn from(post: Post) -> Self {
        Self {
            id: ID(post.id),
            title: post.title,
            body: post.body,
            is_published: post.is_published,
            author_id: post.author,
        }
    }
}

impl From<Comment> for CommentGQL {
    fn from(comment: Comment) -> Self {
        Self {
            id: ID(comment.id),
            text: comment.text,
            author_id: comment.author,
            post_id: comment.post,
        }
    }
}

fn collect<T, G: From<T>>(items: Vec<T>) -> Vec<G> {
    items.into_iter().map(G::from).collect()
}

/// Non-null single-valued relationship. A dangling reference is a
/// NOT_FOUND error instead of a null in a non-null position.
async fn author_of(store: &Store, author_id: &str) -> Result<UserGQL> {
    find_user(store, author_id)
        .await
        .map(UserGQL::from)
        .ok_or_else(|| StoreError::UserNotFound(author_id.to_string()).extend())
}

#[ComplexObject]
impl UserGQL {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(posts_by_author(store, self.id.as_str()).await))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(comments_by_author(store, self.id.as_str()).await))
    }
}

#[ComplexObject]
impl PostGQL {
    async fn author(&self, ctx: &Context<'_>) -> Result<UserGQL> {
        let store = ctx.data::<Store>()?;
        author_of(store, &self.author_id).await
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(comments_for_post(store, self.id.as_str()).await))
    }
}

#[ComplexObject]
impl CommentGQL {
    async fn author(&self, ctx: &Context<'_>) -> Result<UserGQL> {
        let store = ctx.data::<Store>()?;
        author_of(store, &self.author_id).await
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<PostGQL> {
        let store = ctx.data::<Store>()?;
        find_post(store, &self.post_id)
            .await
            .map(PostGQL::from)
            .ok_or_else(|| StoreError::PostNotFound(self.post_id.clone()).extend())
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<UserGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(list_users(store, query.as_deref()).await))
    }

    async fn posts(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<PostGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(list_posts(store, query.as_deref()).await))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentGQL>> {
        let store = ctx.data::<Store>()?;
        Ok(collect(list_comments(store).await))
    }

    /// Fixed demo user, not read from the store.
    async fn me(&self) -> UserGQL {
        UserGQL {
            id: ID("abc123".to_string()),
            name: "Matt".to_string(),
            email: "matt@mail.com".to_string(),
            age: None,
        }
    }

    /// Fixed demo post. Its author is the demo `me` user, which the store
    /// does not contain, so selecting `author` here yields NOT_FOUND.
    async fn post(&self) -> PostGQL {
        PostGQL {
            id: ID("postID123".to_string()),
            title: "My Newest Post!".to_string(),
            body: "I just learned to make custom types in GraphQL".to_string(),
            is_published: true,
            author_id: "abc123".to_string(),
        }
    }

    async fn greeting(&self, name: Option<String>) -> String {
        match name {
            Some(name) if !name.is_empty() => format!("Hello, {name}!"),
            _ => "Hello!".to_string(),
        }
    }

    async fn add(&self, numbers: Vec<f64>) -> f64 {
        numbers.iter().fold(0.0, |total, n| total + n)
    }

    async fn grades(&self) -> Vec<i32> {
        vec![99, 80, 93]
    }
}
