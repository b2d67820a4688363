//! API Layer
//!
//! Backend contract and its HTTP implementation.

mod traits;
mod config;
mod http;

pub use traits::{CommentApi, PostApi, ProfileApi};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use http::HttpApi;
