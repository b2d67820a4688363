//! HTTP API Client
//!
//! `reqwest`-backed implementation of the backend contract. Works natively
//! and on `wasm32` (where reqwest sits on top of `fetch`).

use async_trait::async_trait;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::traits::{CommentApi, PostApi, ProfileApi};
use crate::domain::{
    ApiError, ApiResult, AvatarFile, AvatarUploaded, Category, Comment, CommentBody, CommentId,
    NewPost, Post, PostId, PostListing, PostPatch, Profile, ProfileUpdate,
};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Pull a human-readable message out of an error body.
///
/// JSON bodies with `message` (or `error`) win; otherwise a short plain-text
/// body is used as-is.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string);
    }
    if body.starts_with('<') || body.len() > 200 {
        return None;
    }
    Some(body.to_string())
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        };
        warn!("{}", err);
        Err(err)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.send(builder).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl PostApi for HttpApi {
    async fn list_posts(&self, category: Option<Category>) -> ApiResult<Vec<Post>> {
        let path = match category {
            Some(c) => format!("/posts/category/{}", segment(c.as_str())),
            None => "/posts".to_string(),
        };
        let listing: PostListing = self.fetch_json(self.request(Method::GET, &path)).await?;
        let posts = listing.into_posts();
        debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        self.fetch_json(self.request(Method::POST, "/posts").json(post)).await
    }

    async fn update_post(&self, id: &PostId, patch: &PostPatch) -> ApiResult<Post> {
        let path = format!("/posts/{}", segment(id.as_str()));
        self.fetch_json(self.request(Method::PUT, &path).json(patch)).await
    }

    async fn delete_post(&self, id: &PostId) -> ApiResult<()> {
        let path = format!("/posts/{}", segment(id.as_str()));
        self.fetch_empty(self.request(Method::DELETE, &path)).await
    }

    async fn like_post(&self, id: &PostId) -> ApiResult<()> {
        let path = format!("/posts/{}/like", segment(id.as_str()));
        self.fetch_empty(self.request(Method::POST, &path)).await
    }

    async fn unlike_post(&self, id: &PostId) -> ApiResult<()> {
        let path = format!("/posts/{}/like", segment(id.as_str()));
        self.fetch_empty(self.request(Method::DELETE, &path)).await
    }
}

#[async_trait(?Send)]
impl CommentApi for HttpApi {
    async fn list_comments(&self, post_id: &PostId) -> ApiResult<Vec<Comment>> {
        let path = format!("/posts/{}/comments", segment(post_id.as_str()));
        self.fetch_json(self.request(Method::GET, &path)).await
    }

    async fn add_comment(&self, post_id: &PostId, content: &str) -> ApiResult<Comment> {
        let path = format!("/posts/{}/comments", segment(post_id.as_str()));
        let body = CommentBody { content: content.to_string() };
        self.fetch_json(self.request(Method::POST, &path).json(&body)).await
    }

    async fn update_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        content: &str,
    ) -> ApiResult<Comment> {
        let path = format!(
            "/posts/{}/comments/{}",
            segment(post_id.as_str()),
            segment(comment_id.as_str())
        );
        let body = CommentBody { content: content.to_string() };
        self.fetch_json(self.request(Method::PUT, &path).json(&body)).await
    }

    async fn delete_comment(&self, post_id: &PostId, comment_id: &CommentId) -> ApiResult<()> {
        let path = format!(
            "/posts/{}/comments/{}",
            segment(post_id.as_str()),
            segment(comment_id.as_str())
        );
        self.fetch_empty(self.request(Method::DELETE, &path)).await
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpApi {
    async fn get_profile(&self) -> ApiResult<Profile> {
        self.fetch_json(self.request(Method::GET, "/users/profile")).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Profile> {
        self.fetch_json(self.request(Method::PUT, "/users/profile").json(update)).await
    }

    async fn upload_avatar(&self, file: AvatarFile) -> ApiResult<AvatarUploaded> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::Decode(format!("invalid content type: {}", e)))?;
        }
        let form = Form::new().part("avatar", part);
        self.fetch_json(self.request(Method::POST, "/users/profile/avatar").multipart(form))
            .await
    }
}
