//! 인증 관련 도메인 모델
//!
//! - [`AuthenticatedUser`] - 검증된 토큰에서 꺼낸 요청 단위 신원 정보
//! - [`AccessLevel`] - 라우트별 접근 수준 (일반/관리자)

pub mod authenticated_user;
pub mod access_level;

pub use authenticated_user::AuthenticatedUser;
pub use access_level::AccessLevel;
