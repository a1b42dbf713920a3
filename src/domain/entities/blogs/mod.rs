//! Blogs Entity Module
//!
//! 블로그 게시글과 댓글 엔티티를 정의합니다.

pub mod blog;
pub mod comment;

pub use blog::Blog;
pub use comment::Comment;
