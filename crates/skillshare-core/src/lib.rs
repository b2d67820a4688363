//! SkillShare Core
//!
//! Layered architecture:
//! - domain: Wire entities (posts, comments, profile) and errors
//! - api: Backend contract (traits) and its HTTP implementation
//! - view: Feed and profile view state plus the controllers driving them

pub mod domain;
pub mod api;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiConfig, CommentApi, HttpApi, PostApi, ProfileApi};
pub use domain::{ApiError, ApiResult};
