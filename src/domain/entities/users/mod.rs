//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티와 값 객체(이미지 참조, 댓글 승인 알림)를 정의합니다.

pub mod user;

pub use user::{CommentRequest, ImageRef, User};
