//! View Layer
//!
//! Page state and the controllers that drive it.

mod handle;
mod notice;
mod feed;
mod profile;


pub use handle::StateHandle;
pub use notice::{LoadState, Notice, Notices};
pub use feed::{CommentEdit, FeedController, FeedState, PendingDelete, PostDialog, PostDraft, PostThread};
pub use profile::{
    ProfileController, ProfileField, ProfileForm, ProfileMode, ProfileState, ProfileTab,
    SocialPlatform,
};
