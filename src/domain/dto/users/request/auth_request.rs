//! 인증 요청관련 DTO
//!
//! 회원가입/로그인 요청 본문을 매핑하고 형식을 검증합니다.
//! 누락된 필드는 빈 문자열로 받아 validator 메시지로 거부합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 3, max = 20, message = "username must be 3-20 characters long"))]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 8, max = 30, message = "password must be 8-30 characters long"))]
    pub password: String,
}

/// 로그인 요청 구조체
///
/// `username`에는 사용자명과 이메일 중 어느 것을 넣어도 됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 8, max = 30, message = "password must be 8-30 characters long"))]
    pub password: String,
}
