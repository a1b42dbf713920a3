//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 보낼 JSON 형태로 변환합니다.
//! 비밀번호 해시는 어떤 응답 타입에도 포함되지 않으며,
//! ObjectId는 hex 문자열로, 시간은 RFC 3339 UTC 문자열로 직렬화됩니다.

pub mod user_response;

pub use user_response::{
    AuthResponse, CommentRequestResponse, UserProfileResponse, UserResponse, UserSummary,
};
