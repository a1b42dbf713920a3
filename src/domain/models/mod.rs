//! # Domain Models Module
//!
//! 데이터베이스에 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 문서와 1:1로 매핑되는 영속 객체
//! - **Models** (`./`): 요청 단위로 만들어지고 버려지는 값 객체
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증된 사용자 정보, 접근 수준
//! - [`token`] - JWT 클레임, 발급된 토큰
//! - [`pagination`] - 목록 조회 쿼리 해석과 페이지 범위 검사

pub mod auth;
pub mod token;
pub mod pagination;
