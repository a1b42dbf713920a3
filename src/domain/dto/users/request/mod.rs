//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`web::Json` 추출기, 실패 시 400)
//! 2. **형식 검증**: 길이, 이메일 형식 등 (`validator`, 실패 시 400)
//! 3. **비즈니스 검증**: 중복, 존재 여부 등 (서비스 계층)

pub mod auth_request;
pub mod profile_request;

pub use auth_request::{LoginRequest, SignupRequest};
pub use profile_request::{FollowRequest, UpdateProfileRequest};
