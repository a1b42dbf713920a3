//! 사용자 도메인 DTO (요청/응답)

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
