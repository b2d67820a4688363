//! Domain Layer
//!
//! Entities as the backend sends them, plus the error type shared by
//! every API call.

mod error;
mod id;
mod category;
mod post;
mod comment;
mod profile;
mod time;

pub use error::{ApiError, ApiResult};
pub use id::{CommentId, PostId};
pub use category::{Category, CategoryFilter};
pub use post::{Author, NewPost, Post, PostImage, PostListing, PostPatch};
pub use comment::{Comment, CommentBody};
pub use profile::{AvatarFile, AvatarUploaded, Profile, ProfileUpdate, SocialLinks};
pub use time::{parse_timestamp, relative_time};
