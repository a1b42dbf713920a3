//! 루트/정보/헬스 체크와 404 기본 핸들러

use actix_web::{get, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "This is a bloggerr app api" }))
}

#[get("/api")]
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::message("Blogger API"))
}

/// 헬스 체크 엔드포인트
///
/// 서비스 상태와 기본 정보를 반환합니다. 로드 밸런서나 모니터링 시스템에서 사용합니다.
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT (HS256)"
        }
    }))
}

/// 어떤 라우트에도 맞지 않는 요청 (`App::default_service`)
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());

    Err(AppError::NotFound(format!("Not found {}", target)))
}
