//! 사용자 관리 서비스 모듈
//!
//! 회원가입/로그인, 프로필, 팔로우, 북마크 기능을 담당하는 서비스를 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일/사용자명 중복 방지 (서비스 확인 + 유니크 인덱스)
//! - 응답에서 비밀번호 해시 제외
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repositories, TokenService::from_env(), PasswordService::from_env());
//! let response = user_service.signup(request).await?;
//! ```

pub mod user_service;

pub use user_service::{SaveAction, UserService};
