//! Feed View Model
//!
//! `FeedState` is everything the feed page renders; `FeedController` runs
//! the API calls behind each user action and applies their results.
//! Every successful mutation is followed by a reload: post mutations
//! re-fetch the post list, comment mutations re-fetch that post's comments.

use std::collections::HashMap;

use log::{debug, error, info};

use super::handle::StateHandle;
use super::notice::{LoadState, Notice, Notices};
use crate::api::{CommentApi, PostApi};
use crate::domain::{
    ApiError, Category, CategoryFilter, Comment, CommentId, NewPost, Post, PostId, PostPatch,
};

const LOAD_FAILED: &str = "Failed to load feed. Please try again.";
const DRAFT_INCOMPLETE: &str = "Title and content are required.";

/// Draft buffer behind the create/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Option<Category>,
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    fn to_new_post(&self) -> NewPost {
        NewPost {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            category: self.category,
        }
    }

    fn to_patch(&self) -> PostPatch {
        PostPatch {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.trim().to_string()),
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PostDialog {
    #[default]
    Closed,
    Create,
    Edit { post_id: PostId, draft: PostDraft },
}

/// Post awaiting delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub post_id: PostId,
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEdit {
    pub comment_id: CommentId,
    pub content: String,
}

/// An expanded comment section. Collapsed posts have no entry, so the
/// draft and edit buffers only exist while the comments are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostThread {
    pub loading: bool,
    pub comments: Vec<Comment>,
    pub draft: String,
    pub editing: Option<CommentEdit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub filter: CategoryFilter,
    pub load: LoadState,
    pub refreshing: bool,
    pub new_post: PostDraft,
    pub dialog: PostDialog,
    pub pending_delete: Option<PendingDelete>,
    pub threads: HashMap<PostId, PostThread>,
    pub notices: Notices,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    // ========================
    // Create / Edit dialog
    // ========================

    pub fn open_create(&mut self) {
        self.dialog = PostDialog::Create;
    }

    /// Open the dialog on a copy of the post. Returns false for unknown ids.
    pub fn begin_edit(&mut self, id: &PostId) -> bool {
        let Some(post) = self.post(id) else {
            return false;
        };
        self.dialog = PostDialog::Edit {
            post_id: id.clone(),
            draft: PostDraft::from_post(post),
        };
        true
    }

    /// Closing keeps the create draft; edit drafts are discarded.
    pub fn close_dialog(&mut self) {
        self.dialog = PostDialog::Closed;
    }

    pub fn draft(&self) -> Option<&PostDraft> {
        match &self.dialog {
            PostDialog::Closed => None,
            PostDialog::Create => Some(&self.new_post),
            PostDialog::Edit { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut PostDraft> {
        match &mut self.dialog {
            PostDialog::Closed => None,
            PostDialog::Create => Some(&mut self.new_post),
            PostDialog::Edit { draft, .. } => Some(draft),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.dialog, PostDialog::Edit { .. })
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn request_delete(&mut self, id: &PostId) {
        self.pending_delete = Some(PendingDelete {
            post_id: id.clone(),
            in_flight: false,
        });
    }

    pub fn cancel_delete(&mut self) {
        if self.pending_delete.as_ref().is_some_and(|p| !p.in_flight) {
            self.pending_delete = None;
        }
    }

    // ========================
    // Comment threads
    // ========================

    pub fn thread(&self, id: &PostId) -> Option<&PostThread> {
        self.threads.get(id)
    }

    pub fn is_expanded(&self, id: &PostId) -> bool {
        self.threads.contains_key(id)
    }

    pub fn set_comment_draft(&mut self, id: &PostId, text: String) {
        if let Some(thread) = self.threads.get_mut(id) {
            thread.draft = text;
        }
    }

    pub fn begin_comment_edit(&mut self, id: &PostId, comment_id: &CommentId) {
        let Some(thread) = self.threads.get_mut(id) else {
            return;
        };
        if let Some(comment) = thread.comments.iter().find(|c| &c.id == comment_id) {
            thread.editing = Some(CommentEdit {
                comment_id: comment_id.clone(),
                content: comment.content.clone(),
            });
        }
    }

    pub fn set_comment_edit_text(&mut self, id: &PostId, text: String) {
        if let Some(edit) = self.threads.get_mut(id).and_then(|t| t.editing.as_mut()) {
            edit.content = text;
        }
    }

    pub fn cancel_comment_edit(&mut self, id: &PostId) {
        if let Some(thread) = self.threads.get_mut(id) {
            thread.editing = None;
        }
    }

    /// Loaded thread length when the comments are open, backend count otherwise.
    pub fn comment_count(&self, post: &Post) -> u32 {
        match self.threads.get(&post.id) {
            Some(thread) if !thread.loading => thread.comments.len() as u32,
            _ => post.comment_count(),
        }
    }

    // ========================
    // Notices
    // ========================

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    // ========================
    // Fetch results
    // ========================

    /// Replace the post list wholesale. Returns the ids of threads that are
    /// still open and need their comments re-fetched.
    fn apply_posts(&mut self, posts: Vec<Post>) -> Vec<PostId> {
        self.posts = posts;
        let posts = &self.posts;
        self.threads.retain(|id, _| posts.iter().any(|p| &p.id == id));
        self.load = LoadState::Ready;
        self.refreshing = false;
        self.threads.keys().cloned().collect()
    }

    /// A failed reload only blanks the page when nothing has been shown yet.
    fn apply_load_failure(&mut self) {
        self.refreshing = false;
        if self.load.is_ready() {
            self.notices.raise(LOAD_FAILED);
        } else {
            self.load = LoadState::Failed(LOAD_FAILED.to_string());
        }
    }
}

/// Runs feed actions against the backend
#[derive(Debug, Clone)]
pub struct FeedController<A, H> {
    api: A,
    state: H,
}

impl<A, H> FeedController<A, H>
where
    A: PostApi + CommentApi,
    H: StateHandle<FeedState>,
{
    pub fn new(api: A, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    fn fail(&self, action: &str, err: ApiError) {
        error!("Error trying to {}: {}", action, err);
        self.state
            .write(|s| s.notices.raise(format!("Failed to {}. Please try again.", action)));
    }

    /// Fetch the posts for the current filter. A response for a filter
    /// that has been replaced in the meantime is dropped.
    pub async fn load(&self) {
        let Some(filter) = self.state.read(|s| s.filter) else {
            return;
        };
        match self.api.list_posts(filter.category()).await {
            Ok(posts) => {
                let count = posts.len();
                let open = self
                    .state
                    .write(|s| (s.filter == filter).then(|| s.apply_posts(posts)))
                    .flatten();
                let Some(open) = open else {
                    debug!("Dropping stale feed response ({})", filter.label());
                    return;
                };
                info!("Feed loaded: {} posts ({})", count, filter.label());
                for id in open {
                    self.load_comments(&id).await;
                }
            }
            Err(e) => {
                error!("Error loading posts: {}", e);
                self.state.write(|s| {
                    if s.filter == filter {
                        s.apply_load_failure();
                    }
                });
            }
        }
    }

    /// Re-fetch while keeping the rendered list on failure.
    pub async fn refresh(&self) {
        if self.state.write(|s| s.refreshing = true).is_none() {
            return;
        }
        self.load().await;
    }

    /// Full-page retry after a failed initial load.
    pub async fn retry(&self) {
        if self.state.write(|s| s.load = LoadState::Loading).is_none() {
            return;
        }
        self.load().await;
    }

    pub async fn select_category(&self, filter: CategoryFilter) {
        if self.state.write(|s| s.filter = filter).is_none() {
            return;
        }
        self.load().await;
    }

    pub async fn create_post(&self) {
        let Some(draft) = self.state.read(|s| s.new_post.clone()) else {
            return;
        };
        if !draft.is_complete() {
            self.state.write(|s| s.notices.raise(DRAFT_INCOMPLETE));
            return;
        }
        match self.api.create_post(&draft.to_new_post()).await {
            Ok(post) => {
                info!("Created post {}", post.id);
                self.state.write(|s| {
                    s.new_post = PostDraft::default();
                    s.dialog = PostDialog::Closed;
                });
                self.load().await;
            }
            Err(e) => self.fail("create post", e),
        }
    }

    pub async fn save_edit(&self) {
        let editing = self.state.read(|s| match &s.dialog {
            PostDialog::Edit { post_id, draft } => Some((post_id.clone(), draft.clone())),
            _ => None,
        });
        let Some((id, draft)) = editing.flatten() else {
            return;
        };
        if !draft.is_complete() {
            self.state.write(|s| s.notices.raise(DRAFT_INCOMPLETE));
            return;
        }
        match self.api.update_post(&id, &draft.to_patch()).await {
            Ok(_) => {
                info!("Updated post {}", id);
                self.state.write(|s| {
                    if matches!(&s.dialog, PostDialog::Edit { post_id, .. } if post_id == &id) {
                        s.dialog = PostDialog::Closed;
                    }
                });
                self.load().await;
            }
            Err(e) => self.fail("update post", e),
        }
    }

    /// Delete the post awaiting confirmation. Without a pending
    /// confirmation, or while one is already in flight, nothing is sent.
    pub async fn confirm_delete(&self) {
        let claimed = self.state.write(|s| match s.pending_delete.as_mut() {
            Some(pending) if !pending.in_flight => {
                pending.in_flight = true;
                Some(pending.post_id.clone())
            }
            _ => None,
        });
        let Some(id) = claimed.flatten() else {
            return;
        };
        match self.api.delete_post(&id).await {
            Ok(()) => {
                info!("Deleted post {}", id);
                self.state.write(|s| s.pending_delete = None);
                self.load().await;
            }
            Err(e) => {
                self.state.write(|s| {
                    if let Some(pending) = s.pending_delete.as_mut() {
                        pending.in_flight = false;
                    }
                });
                self.fail("delete post", e);
            }
        }
    }

    pub async fn like(&self, id: &PostId) {
        match self.api.like_post(id).await {
            Ok(()) => self.load().await,
            Err(e) => self.fail("like post", e),
        }
    }

    pub async fn unlike(&self, id: &PostId) {
        match self.api.unlike_post(id).await {
            Ok(()) => self.load().await,
            Err(e) => self.fail("unlike post", e),
        }
    }

    /// Like or unlike depending on what is currently displayed.
    pub async fn toggle_like(&self, id: &PostId) {
        let liked = self.state.read(|s| s.post(id).map(|p| p.is_liked));
        match liked.flatten() {
            Some(true) => self.unlike(id).await,
            Some(false) => self.like(id).await,
            None => {}
        }
    }

    /// Expand (and fetch) or collapse a post's comments.
    pub async fn toggle_comments(&self, id: &PostId) {
        let opened = self.state.write(|s| {
            if s.threads.remove(id).is_some() {
                false
            } else {
                s.threads.insert(
                    id.clone(),
                    PostThread {
                        loading: true,
                        ..Default::default()
                    },
                );
                true
            }
        });
        if opened == Some(true) {
            self.load_comments(id).await;
        }
    }

    pub async fn load_comments(&self, id: &PostId) {
        match self.api.list_comments(id).await {
            Ok(comments) => {
                self.state.write(|s| {
                    if let Some(thread) = s.threads.get_mut(id) {
                        thread.comments = comments;
                        thread.loading = false;
                    }
                });
            }
            Err(e) => {
                self.state.write(|s| {
                    if let Some(thread) = s.threads.get_mut(id) {
                        thread.loading = false;
                    }
                });
                self.fail("load comments", e);
            }
        }
    }

    pub async fn add_comment(&self, id: &PostId) {
        let draft = self
            .state
            .read(|s| s.thread(id).map(|t| t.draft.trim().to_string()))
            .flatten();
        let Some(content) = draft.filter(|c| !c.is_empty()) else {
            return;
        };
        match self.api.add_comment(id, &content).await {
            Ok(_) => {
                self.state.write(|s| s.set_comment_draft(id, String::new()));
                self.load_comments(id).await;
            }
            Err(e) => self.fail("add comment", e),
        }
    }

    pub async fn save_comment_edit(&self, id: &PostId) {
        let editing = self
            .state
            .read(|s| s.thread(id).and_then(|t| t.editing.clone()))
            .flatten();
        let Some(edit) = editing else {
            return;
        };
        let content = edit.content.trim();
        if content.is_empty() {
            return;
        }
        match self.api.update_comment(id, &edit.comment_id, content).await {
            Ok(_) => {
                self.state.write(|s| s.cancel_comment_edit(id));
                self.load_comments(id).await;
            }
            Err(e) => self.fail("update comment", e),
        }
    }

    pub async fn delete_comment(&self, id: &PostId, comment_id: &CommentId) {
        match self.api.delete_comment(id, comment_id).await {
            Ok(()) => self.load_comments(id).await,
            Err(e) => self.fail("delete comment", e),
        }
    }
}
