use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::db::models::comment::NewComment;
use crate::db::models::post::NewPost;
use crate::db::models::user::NewUser;
use crate::db::queries::comment::create_comment;
use crate::db::queries::post::create_post;
use crate::db::queries::user::create_user;
use crate::db::store::Store;
use crate::graphql::graph::{CommentGQL, PostGQL, UserGQL};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> Result<UserGQL> {
        let store = ctx.data::<Store>()?;
        let user = create_user(store, NewUser { name, email, age })
            .await
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        is_published: bool,
        author: ID,
    ) -> Result<PostGQL> {
        let store = ctx.data::<Store>()?;
        let new_post = NewPost {
            title,
            body,
            is_published,
            author: author.0,
        };
        let post = create_post(store, new_post).await.map_err(|e| e.extend())?;
        Ok(post.into())
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        author: ID,
        post: ID,
    ) -> Result<CommentGQL> {
        let store = ctx.data::<Store>()?;
        let new_comment = NewComment {
            text,
            author: author.0,
            post: post.0,
        };
        let comment = create_comment(store, new_comment)
            .await
            .map_err(|e| e.extend())?;
        Ok(comment.into())
    }
}
