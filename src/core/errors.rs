//! # Application Error Handling System
//!
//! 블로그 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스/리포지토리/미들웨어에서 발생한 모든 실패는 [`AppError`]로 모이고,
//! `actix_web::ResponseError` 구현을 통해 하나의 JSON 에러 봉투로 변환됩니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": { "message": "Page number is out of bounds" },
//!   "status": 400
//! }
//! ```
//!
//! `status` 필드는 HTTP 상태 코드를 그대로 반영합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 | 본문/쿼리/경로 형식 오류 |
//! | `MissingField` | 400 | 필수 필드 누락 |
//! | `Unauthenticated` | 401 | 토큰 없음, 위조/만료 토큰 |
//! | `AdminRequired` | 401 | 관리자 전용 라우트에 일반 사용자 접근 |
//! | `Forbidden` | 400 | 소유자가 아닌 사용자의 변경 시도 |
//! | `Conflict` | 400 | 사용자명/이메일/카테고리 중복 |
//! | `InvalidCredentials` | 400 | 로그인 실패 |
//! | `InvalidOperation` | 400 | 자기 자신 팔로우 등 |
//! | `UnknownReference` | 400 | 참조 대상(블로그/댓글/카테고리) 없음 |
//! | `NotFound` | 404 | 주소로 지정한 리소스 없음, 매칭되지 않는 라우트 |
//! | `OutOfRange` | 400 | 페이지 범위 초과 |
//! | `DatabaseError` | 500 | MongoDB 오류 (메시지는 로그에만 기록) |
//! | `InternalError` | 500 | 해싱/토큰 서명/무결성 오류 |
//!
//! 400과 401, 404가 섞여 있는 것은 기존 API 클라이언트가 의존하는 상태 코드를
//! 그대로 유지하기 때문입니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형의 문자열은 클라이언트에게 그대로 전달되는 메시지입니다.
/// 단, `DatabaseError`는 내부 정보 노출을 막기 위해 일반 메시지로 대체됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    #[error("{0}")]
    ValidationError(String),

    /// 필수 필드 누락
    #[error("{0}")]
    MissingField(String),

    /// 인증 실패 (토큰 없음/위조/만료)
    #[error("{0}")]
    Unauthenticated(String),

    /// 관리자 역할이 필요한 라우트에 대한 접근 거부
    #[error("{0}")]
    AdminRequired(String),

    /// 유효한 사용자지만 리소스 소유자가 아님
    #[error("{0}")]
    Forbidden(String),

    /// 유니크 제약 위반
    #[error("{0}")]
    Conflict(String),

    /// 사용자명/이메일 또는 비밀번호 불일치
    #[error("{0}")]
    InvalidCredentials(String),

    /// 허용되지 않는 연산
    #[error("{0}")]
    InvalidOperation(String),

    /// 요청이 참조하는 엔티티가 존재하지 않음
    #[error("{0}")]
    UnknownReference(String),

    /// 리소스 찾을 수 없음
    #[error("{0}")]
    NotFound(String),

    /// 페이지 번호 범위 초과
    #[error("{0}")]
    OutOfRange(String),

    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출되는 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "Something went wrong".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::MissingField(_)
            | AppError::Forbidden(_)
            | AppError::Conflict(_)
            | AppError::InvalidCredentials(_)
            | AppError::InvalidOperation(_)
            | AppError::UnknownReference(_)
            | AppError::OutOfRange(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) | AppError::AdminRequired(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원본 메시지를 `error` 레벨로 기록합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(json!({
            "error": {
                "message": self.public_message(),
            },
            "status": status.as_u16(),
        }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
