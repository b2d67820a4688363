//! In-memory backend used by the view tests.
//!
//! Behaves like the REST backend closely enough for the controllers and
//! records every call so tests can assert on exactly what was sent.

use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{CommentApi, PostApi, ProfileApi};
use crate::domain::{
    ApiError, ApiResult, Author, AvatarFile, AvatarUploaded, Category, Comment, CommentId, NewPost,
    Post, PostId, PostPatch, Profile, ProfileUpdate,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPosts(Option<Category>),
    CreatePost(NewPost),
    UpdatePost(PostId, PostPatch),
    DeletePost(PostId),
    Like(PostId),
    Unlike(PostId),
    ListComments(PostId),
    AddComment(PostId, String),
    UpdateComment(PostId, CommentId, String),
    DeleteComment(PostId, CommentId),
    GetProfile,
    UpdateProfile(ProfileUpdate),
    UploadAvatar(String),
}

#[derive(Default)]
struct Backend {
    posts: Vec<Post>,
    comments: HashMap<PostId, Vec<Comment>>,
    profile: Profile,
    next_id: u32,
    calls: Vec<Call>,
    failing: HashMap<&'static str, ApiError>,
    stalls: Vec<(Call, u32)>,
}

impl Backend {
    /// Ids handed out by the backend never clash with fixture ids like `c1`.
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("new-{}{}", prefix, self.next_id)
    }

    fn post_mut(&mut self, id: &PostId) -> ApiResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(ApiError::Status { status: 404, message: Some("Post not found".into()) })
    }

    fn sync_comment_count(&mut self, id: &PostId) {
        let count = self.comments.get(id).map_or(0, |c| c.len()) as u32;
        if let Ok(post) = self.post_mut(id) {
            post.set_comment_count(count);
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryApi {
    inner: Rc<RefCell<Backend>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.inner.borrow_mut().posts = posts;
        self
    }

    pub fn with_comments(self, post_id: &str, comments: Vec<Comment>) -> Self {
        {
            let mut backend = self.inner.borrow_mut();
            let id = PostId::new(post_id);
            backend.comments.insert(id.clone(), comments);
            backend.sync_comment_count(&id);
        }
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.inner.borrow_mut().profile = profile;
        self
    }

    /// Make every call of `op` fail with `err` until `recover(op)`.
    pub fn fail(&self, op: &'static str, err: ApiError) {
        self.inner.borrow_mut().failing.insert(op, err);
    }

    pub fn recover(&self, op: &'static str) {
        self.inner.borrow_mut().failing.remove(op);
    }

    /// Suspend every matching call for `polls` scheduler turns before it
    /// touches the backend, so concurrent actions interleave.
    pub fn stall(&self, call: Call, polls: u32) {
        self.inner.borrow_mut().stalls.push((call, polls));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.inner.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    pub fn posts(&self) -> Vec<Post> {
        self.inner.borrow().posts.clone()
    }

    pub fn profile(&self) -> Profile {
        self.inner.borrow().profile.clone()
    }

    /// Record the call, wait out any stall, then fail if `op` is set to fail.
    async fn enter(&self, op: &'static str, call: Call) -> ApiResult<RefMut<'_, Backend>> {
        let polls = {
            let mut backend = self.inner.borrow_mut();
            let polls = backend.stalls.iter().find(|(c, _)| c == &call).map_or(0, |(_, n)| *n);
            backend.calls.push(call);
            polls
        };
        for _ in 0..polls {
            tokio::task::yield_now().await;
        }
        let backend = self.inner.borrow_mut();
        if let Some(err) = backend.failing.get(op) {
            return Err(err.clone());
        }
        Ok(backend)
    }
}

pub fn comment(id: &str, content: &str) -> Comment {
    Comment {
        id: CommentId::new(id),
        content: content.to_string(),
        author: Some(Author { name: "Kim".into(), avatar: None }),
        created_at: None,
    }
}

#[async_trait(?Send)]
impl PostApi for MemoryApi {
    async fn list_posts(&self, category: Option<Category>) -> ApiResult<Vec<Post>> {
        let backend = self.enter("list_posts", Call::ListPosts(category)).await?;
        Ok(backend
            .posts
            .iter()
            .filter(|p| category.map_or(true, |c| p.category.as_deref() == Some(c.as_str())))
            .cloned()
            .collect())
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let mut backend = self.enter("create_post", Call::CreatePost(post.clone())).await?;
        let id = backend.next_id("p");
        let mut created = Post::new(id, post.title.clone(), post.content.clone());
        created.category = post.category.map(|c| c.as_str().to_string());
        created.set_likes(0);
        created.set_comment_count(0);
        backend.posts.insert(0, created.clone());
        Ok(created)
    }

    async fn update_post(&self, id: &PostId, patch: &PostPatch) -> ApiResult<Post> {
        let call = Call::UpdatePost(id.clone(), patch.clone());
        let mut backend = self.enter("update_post", call).await?;
        let post = backend.post_mut(id)?;
        if let Some(title) = &patch.title {
            post.title = title.clone();
        }
        if let Some(content) = &patch.content {
            post.content = content.clone();
        }
        if let Some(category) = patch.category {
            post.category = Some(category.as_str().to_string());
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &PostId) -> ApiResult<()> {
        let mut backend = self.enter("delete_post", Call::DeletePost(id.clone())).await?;
        backend.post_mut(id)?;
        backend.posts.retain(|p| &p.id != id);
        backend.comments.remove(id);
        Ok(())
    }

    async fn like_post(&self, id: &PostId) -> ApiResult<()> {
        let mut backend = self.enter("like_post", Call::Like(id.clone())).await?;
        let post = backend.post_mut(id)?;
        if !post.is_liked {
            post.is_liked = true;
            let likes = post.likes();
            post.set_likes(likes + 1);
        }
        Ok(())
    }

    async fn unlike_post(&self, id: &PostId) -> ApiResult<()> {
        let mut backend = self.enter("unlike_post", Call::Unlike(id.clone())).await?;
        let post = backend.post_mut(id)?;
        if post.is_liked {
            post.is_liked = false;
            let likes = post.likes();
            post.set_likes(likes.saturating_sub(1));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl CommentApi for MemoryApi {
    async fn list_comments(&self, post_id: &PostId) -> ApiResult<Vec<Comment>> {
        let backend = self.enter("list_comments", Call::ListComments(post_id.clone())).await?;
        Ok(backend.comments.get(post_id).cloned().unwrap_or_default())
    }

    async fn add_comment(&self, post_id: &PostId, content: &str) -> ApiResult<Comment> {
        let call = Call::AddComment(post_id.clone(), content.to_string());
        let mut backend = self.enter("add_comment", call).await?;
        backend.post_mut(post_id)?;
        let id = backend.next_id("c");
        let created = comment(&id, content);
        backend
            .comments
            .entry(post_id.clone())
            .or_default()
            .push(created.clone());
        backend.sync_comment_count(post_id);
        Ok(created)
    }

    async fn update_comment(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        content: &str,
    ) -> ApiResult<Comment> {
        let mut backend = self.enter(
            "update_comment",
            Call::UpdateComment(post_id.clone(), comment_id.clone(), content.to_string()),
        ).await?;
        let found = backend
            .comments
            .get_mut(post_id)
            .and_then(|comments| comments.iter_mut().find(|c| &c.id == comment_id));
        match found {
            Some(existing) => {
                existing.content = content.to_string();
                Ok(existing.clone())
            }
            None => Err(ApiError::Status { status: 404, message: Some("Comment not found".into()) }),
        }
    }

    async fn delete_comment(&self, post_id: &PostId, comment_id: &CommentId) -> ApiResult<()> {
        let mut backend = self.enter(
            "delete_comment",
            Call::DeleteComment(post_id.clone(), comment_id.clone()),
        ).await?;
        if let Some(comments) = backend.comments.get_mut(post_id) {
            comments.retain(|c| &c.id != comment_id);
        }
        backend.sync_comment_count(post_id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProfileApi for MemoryApi {
    async fn get_profile(&self) -> ApiResult<Profile> {
        let backend = self.enter("get_profile", Call::GetProfile).await?;
        Ok(backend.profile.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Profile> {
        let mut backend = self.enter("update_profile", Call::UpdateProfile(update.clone())).await?;
        let profile = &mut backend.profile;
        let text = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
        profile.name = text(&update.name);
        profile.email = text(&update.email);
        profile.bio = text(&update.bio);
        profile.location = text(&update.location);
        profile.education = text(&update.education);
        profile.occupation = text(&update.occupation);
        profile.skills = update.skills.clone();
        profile.social_links = Some(update.social_links.clone());
        Ok(profile.clone())
    }

    async fn upload_avatar(&self, file: AvatarFile) -> ApiResult<AvatarUploaded> {
        let call = Call::UploadAvatar(file.file_name.clone());
        let mut backend = self.enter("upload_avatar", call).await?;
        let url = format!("https://cdn.test/{}", file.file_name);
        backend.profile.profile_picture_url = Some(url.clone());
        Ok(AvatarUploaded { profile_picture_url: url })
    }
}
