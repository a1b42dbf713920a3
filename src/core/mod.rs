//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입과 상태 조립을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, `{error: {message}, status}` 봉투
//! - **자동 변환**: MongoDB/validator 에러에서 `?`로 변환
//!
//! ### [`state`] - 서비스 조립
//! - **AppState**: 리포지토리와 보안 서비스를 주입한 서비스 묶음
//! - **추출기 설정**: JSON/쿼리/경로 에러를 `ValidationError`로 통일
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{errors::AppError, state::AppState};
//!
//! let state = AppState::new(repositories, TokenService::from_env(), PasswordService::from_env());
//! HttpServer::new(move || {
//!     let state = state.clone();
//!     App::new().configure(move |cfg| state.configure(cfg))
//! });
//! ```

pub mod errors;
pub mod state;

pub use errors::{AppError, AppResult};
pub use state::AppState;
