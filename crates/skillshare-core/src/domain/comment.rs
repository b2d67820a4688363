//! Comment Entity

use serde::{Deserialize, Serialize};

use super::id::CommentId;
use super::post::Author;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Body of add/update comment requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentBody {
    pub content: String,
}
