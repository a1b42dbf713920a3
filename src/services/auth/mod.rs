//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - HS256 JWT 액세스 토큰 발급/검증 ([`TokenService`])
//! - bcrypt 비밀번호 해싱/검증 ([`PasswordService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordService, TokenService};
//!
//! let digest = PasswordService::from_env().hash("password123")?;
//! let issued = TokenService::from_env().issue(&user_id, Some("user"))?;
//! ```

pub mod token_service;
pub mod password_service;

pub use token_service::{TokenError, TokenService};
pub use password_service::PasswordService;
