//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 제목 → slug 변환, 충돌 회피 접미사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{slugify, with_random_suffix};
//!
//! let slug = slugify("Hello World");          // "hello-world"
//! let unique = with_random_suffix(&slug);     // "hello-world-1a2b3c4d"
//! ```

pub mod string_utils;
