//! # HTTP 미들웨어 모듈
//!
//! 요청이 핸들러에 닿기 전에 실행되는 미들웨어를 제공합니다.
//!
//! - [`AuthMiddleware`] - Bearer JWT 검증, 관리자 역할 확인, 신원 정보를 request extension에 저장
//!
//! 검증에 성공하면 핸들러는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//! 추출기로 신원 정보를 받습니다. 실패 응답은 다른 에러와 같은 `{error: {message}, status}` 형태입니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
