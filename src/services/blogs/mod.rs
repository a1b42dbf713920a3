//! 블로그/댓글 서비스 모듈

pub mod blog_service;
pub mod comment_service;

pub use blog_service::BlogService;
pub use comment_service::CommentService;

pub(crate) use blog_service::{populate_list_items, unique_slug};
