//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 영속 객체
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 요청 단위 값 객체 (인증 정보, 토큰, 페이지네이션)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
