//! Post Entity
//!
//! A feed post as returned by the backend. Deployments disagree on a few
//! field names (`likes` vs `likesCount`, embedded `comments` vs
//! `commentsCount`), so both spellings are accepted and resolved here.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::comment::Comment;
use super::id::PostId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Most images a card shows before collapsing the rest into a counter
pub const GALLERY_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    likes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    likes_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments_count: Option<u32>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub images: Vec<PostImage>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<PostId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: None,
            likes: None,
            likes_count: None,
            comments: Vec::new(),
            comments_count: None,
            is_liked: false,
            images: Vec::new(),
            author: None,
            created_at: None,
        }
    }

    /// Like count; `likesCount` wins over the legacy `likes` field.
    pub fn likes(&self) -> u32 {
        self.likes_count.or(self.likes).unwrap_or(0)
    }

    pub fn set_likes(&mut self, count: u32) {
        self.likes_count = Some(count);
        self.likes = None;
    }

    /// Comment count as reported by the backend, falling back to the
    /// embedded comment list.
    pub fn comment_count(&self) -> u32 {
        self.comments_count
            .unwrap_or_else(|| self.comments.len() as u32)
    }

    pub fn set_comment_count(&mut self, count: u32) {
        self.comments_count = Some(count);
    }

    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::parse)
    }

    /// Images shown on the card, plus how many more are hidden behind a
    /// "+N" counter.
    pub fn gallery(&self) -> (&[PostImage], usize) {
        let shown = self.images.len().min(GALLERY_SIZE);
        (&self.images[..shown], self.images.len() - shown)
    }

    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Body of a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Partial update; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// The list endpoints answer with either a bare array or a page object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostListing {
    Plain(Vec<Post>),
    Page { content: Vec<Post> },
}

impl PostListing {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            PostListing::Plain(posts) => posts,
            PostListing::Page { content } => content,
        }
    }
}
