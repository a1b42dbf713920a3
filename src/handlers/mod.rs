//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - JWT 인증, 관리자 확인            ← 접근 제어
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 검증, 응답 봉투              ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<...Service>`로 주입받습니다.
//! - 요청 본문은 `payload.validate()?`로 먼저 검증합니다.
//! - 반환 타입은 `Result<HttpResponse, AppError>`이며, 에러는
//!   `AppError::error_response()`가 `{error: {message}, status}`로 바꿉니다.
//! - 성공 응답은 [`ApiResponse`](crate::domain::dto::ApiResponse) 봉투를 씁니다.
//!
//! ```rust,ignore
//! #[get("/{slug}")]
//! pub async fn get_blog(
//!     blogs: web::Data<BlogService>,
//!     slug: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let blog = blogs.get(&slug).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success(blog)))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`system`] - `/`, `/api`, `/health`, 404
//! - [`users`] - `/api/users`
//! - [`blogs`] - `/api/blogs`
//! - [`admin`] - `/admin`

pub mod system;
pub mod users;
pub mod blogs;
pub mod admin;
