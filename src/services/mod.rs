//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`Repositories`](crate::repositories::Repositories) 묶음과 보안 서비스를
//! 생성 시 주입받는 `Clone` 값이며, 애플리케이션 시작 시 한 번 만들어
//! `web::Data`로 등록합니다.
//!
//! # Features
//!
//! - 회원가입/로그인, 프로필, 팔로우, 북마크 ([`users`])
//! - 블로그 작성/삭제, 카테고리 필터 목록, 댓글 승인, 추천 토글 ([`blogs`])
//! - 카테고리 관리 ([`categories`])
//! - JWT 토큰, bcrypt 비밀번호 ([`auth`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, blogs::BlogService};
//!
//! let blog_service = BlogService::new(repositories.clone());
//! let blog = blog_service.get("hello-world").await?;
//! ```

pub mod auth;
pub mod users;
pub mod blogs;
pub mod categories;
