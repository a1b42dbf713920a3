//! # Data Transfer Objects
//!
//! HTTP 요청 본문과 응답 본문의 형태를 정의합니다.
//! 엔티티를 그대로 내보내지 않고 항상 DTO를 거치므로, 비밀번호 해시 같은 내부 필드가
//! 응답에 섞여 나갈 수 없습니다.
//!
//! - [`common`] - 성공 응답 봉투 `{data?, message?, status}`
//! - [`users`] - 회원가입/로그인/프로필
//! - [`blogs`] - 게시글/댓글/카테고리

pub mod common;
pub mod users;
pub mod blogs;

pub use common::ApiResponse;
