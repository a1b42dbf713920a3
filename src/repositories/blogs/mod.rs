//! 블로그/댓글 데이터 액세스 계층

pub mod blog_repo;
pub mod comment_repo;

pub use blog_repo::{BlogFilter, BlogRepository, MongoBlogRepository};
pub use comment_repo::{CommentRepository, MongoCommentRepository};
