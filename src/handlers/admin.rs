//! # 관리자 HTTP 핸들러
//!
//! `/admin` 스코프 전체가 `AuthMiddleware::privileged()`로 감싸져 있어,
//! 여기의 핸들러는 `admin` 역할이 확인된 요청만 받습니다.

use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::blogs::CreateCategoryRequest;
use crate::domain::dto::ApiResponse;
use crate::services::blogs::BlogService;
use crate::services::categories::CategoryService;

#[get("")]
pub async fn admin_root() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::message("Admin Route"))
}

/// 카테고리 생성
///
/// # 응답 (200 OK)
///
/// ```json
/// { "data": { "title": "Rust", "slug": "rust" }, "status": 200 }
/// ```
#[post("/category")]
pub async fn create_category(
    categories: web::Data<CategoryService>,
    payload: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let created = categories.create(&payload.title).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(created)))
}

#[get("/category")]
pub async fn list_categories(
    categories: web::Data<CategoryService>,
) -> Result<HttpResponse, AppError> {
    let list = categories.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(list)))
}

/// 추천(featured) 토글
#[put("/blogs/feature/{slug}")]
pub async fn toggle_featured(
    blogs: web::Data<BlogService>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let message = if blogs.toggle_featured(&slug).await? {
        "Success added to featured"
    } else {
        "Success removed from featured"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::message(message)))
}
