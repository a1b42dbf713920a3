//! 블로그 도메인 DTO (게시글, 댓글, 카테고리)

pub mod request;
pub mod response;

pub use request::{CreateBlogRequest, CreateCategoryRequest, CreateCommentRequest, NewBlog};
pub use response::{BlogListItem, BlogResponse, CategoryResponse, CommentResponse, CreatedCategory};
