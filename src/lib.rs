//! 블로거 백엔드
//!
//! 블로그 플랫폼의 JSON API 서버입니다.
//! 사용자 계정, JWT 인증, 블로그 게시글, 카테고리, 댓글, 팔로우, 북마크를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 프로필 수정, 공개 프로필
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증, 관리자 라우트
//! - **블로그**: 작성, slug 조회, 카테고리 필터 목록, 추천 토글, 삭제 시 연쇄 정리
//! - **댓글**: 작성자 승인 전에는 블로그 주인에게만 노출
//! - **MongoDB**: 모든 데이터 영구 저장, 유니크 인덱스로 중복 방지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← JSON API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← Bearer JWT 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (MongoDB / 인메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blogger_backend::core::AppState;
//! use blogger_backend::repositories::Repositories;
//! use blogger_backend::services::auth::{PasswordService, TokenService};
//!
//! let state = AppState::new(Repositories::in_memory(), TokenService::from_env(), PasswordService::from_env());
//! let response = state.users.signup(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
