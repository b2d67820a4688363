//! UI Components
//!
//! Pages and the Leptos components they are built from.

mod nav_bar;
mod notice_banner;
mod page_status;
mod category_bar;
mod feed_page;
mod post_card;
mod comment_list;
mod post_dialog;
mod delete_confirm_dialog;
mod profile_page;
mod profile_header;
mod profile_sections;
mod avatar_dialog;

pub use nav_bar::NavBar;
pub use notice_banner::NoticeBanner;
pub use page_status::PageStatus;
pub use category_bar::CategoryBar;
pub use feed_page::FeedPage;
pub use post_card::PostCard;
pub use comment_list::CommentList;
pub use post_dialog::PostDialog;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use profile_page::ProfilePage;
pub use profile_header::ProfileHeader;
pub use profile_sections::{AboutSection, ActivitySection, SettingsSection, SkillsSection};
pub use avatar_dialog::AvatarDialog;
