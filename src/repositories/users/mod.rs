//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository) 계약과 MongoDB 구현을 제공합니다.

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserRepository, UserSet};
