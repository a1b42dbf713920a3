//! JWT 인증 토큰 구조체
//!
//! RFC 7519 표준 클레임(`iat`, `exp`)과 애플리케이션 클레임(`user_id`, `role`)을 정의합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `user_id`: 토큰의 주체 (사용자 ObjectId hex)
/// - `role`: 사용자 역할 (선택사항, 이전 서버가 발급한 토큰에는 없음)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
///
/// `sub` 대신 `user_id`를 쓰는 것은 이미 발급된 토큰과 호환을 유지하기 위해서입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 액세스 토큰과 유효 기간(초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}
