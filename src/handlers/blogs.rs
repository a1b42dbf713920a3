//! # 블로그/댓글 HTTP 핸들러
//!
//! `/api/blogs` 아래의 엔드포인트입니다. 목록, 카테고리 목록, 단건 조회는 공개이며
//! 작성/삭제/댓글은 Bearer 토큰이 필요합니다.
//!
//! `category-list`와 `comments/...`는 `{slug}`보다 먼저 등록해야 합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::blogs::{CreateBlogRequest, CreateCommentRequest};
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::ListQuery;
use crate::middlewares::AuthMiddleware;
use crate::services::blogs::{BlogService, CommentService};
use crate::services::categories::CategoryService;

/// 블로그 목록
///
/// `GET /api/blogs?page=1&per_page=10&sort=-createdAt&category=all`
///
/// 작성자(`username profile name`)와 카테고리(`title slug`)가 채워진 요약을 반환합니다.
#[get("")]
pub async fn list_blogs(
    blogs: web::Data<BlogService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let items = blogs.list(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

#[get("/category-list")]
pub async fn category_list(
    categories: web::Data<CategoryService>,
) -> Result<HttpResponse, AppError> {
    let list = categories.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(list)))
}

/// 블로그 작성
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Hello World",
///   "body": "...",
///   "image_url": "https://cdn.example.com/cover.png",
///   "category": "65a000000000000000000001",
///   "tags": ["rust", "actix"]
/// }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// { "data": "Blog created", "status": 200 }
/// ```
#[post("/create", wrap = "AuthMiddleware::standard()")]
pub async fn create_blog(
    blogs: web::Data<BlogService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateBlogRequest>,
) -> Result<HttpResponse, AppError> {
    blogs.create(&user.object_id()?, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Blog created")))
}

#[get("/comments/{slug}", wrap = "AuthMiddleware::standard()")]
pub async fn list_comments(
    comments: web::Data<CommentService>,
    user: AuthenticatedUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list = comments.list_for_blog(&user.object_id()?, &slug).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(list)))
}

#[post("/comments/{slug}", wrap = "AuthMiddleware::standard()")]
pub async fn create_comment(
    comments: web::Data<CommentService>,
    user: AuthenticatedUser,
    slug: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let payload = payload.into_inner();
    comments.create(&user.object_id()?, &slug, payload.body).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// 댓글 승인 (블로그 작성자만)
#[put("/comments/approve/{id}", wrap = "AuthMiddleware::standard()")]
pub async fn approve_comment(
    comments: web::Data<CommentService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    comments.approve(&user.object_id()?, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

#[get("/{slug}")]
pub async fn get_blog(
    blogs: web::Data<BlogService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blog = blogs.get(&slug).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(blog)))
}

/// 블로그 삭제 (작성자만, 댓글과 북마크도 함께 정리)
#[delete("/{slug}", wrap = "AuthMiddleware::standard()")]
pub async fn delete_blog(
    blogs: web::Data<BlogService>,
    user: AuthenticatedUser,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    blogs.delete(&user.object_id()?, &slug).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
