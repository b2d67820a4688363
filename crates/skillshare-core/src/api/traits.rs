//! API Layer - Core Traits
//!
//! Abstract backend contract consumed by the view controllers.
//! `HttpApi` talks to the REST backend; tests plug in an in-memory fake.
//!
//! Futures are `?Send`: in the browser every request runs on the single
//! UI event loop.

use async_trait::async_trait;

use crate::domain::{
    ApiResult, AvatarFile, AvatarUploaded, Category, Comment, CommentId, NewPost, Post, PostId,
    PostPatch, Profile, ProfileUpdate,
};

/// Post listing and mutation
#[async_trait(?Send)]
pub trait PostApi {
    /// List posts, optionally restricted to one category
    async fn list_posts(&self, category: Option<Category>) -> ApiResult<Vec<Post>>;

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post>;

    async fn update_post(&self, id: &PostId, patch: &PostPatch) -> ApiResult<Post>;

    async fn delete_post(&self, id: &PostId) -> ApiResult<()>;

    async fn like_post(&self, id: &PostId) -> ApiResult<()>;

    async fn unlike_post(&self, id: &PostId) -> ApiResult<()>;
}

/// Comments, always addressed under their post
#[async_trait(?Send)]
pub trait CommentApi {
    async fn list_comments(&self, post_id: &PostId) -> ApiResult<Vec<Comment>>;

    async fn add_comment(&self, post_id: &PostId, content: &str) -> ApiResult<Comment>;

    async fn update_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        content: &str,
    ) -> ApiResult<Comment>;

    async fn delete_comment(&self, post_id: &PostId, comment_id: &CommentId) -> ApiResult<()>;
}

/// Current user's profile
#[async_trait(?Send)]
pub trait ProfileApi {
    async fn get_profile(&self) -> ApiResult<Profile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Profile>;

    async fn upload_avatar(&self, file: AvatarFile) -> ApiResult<AvatarUploaded>;
}
