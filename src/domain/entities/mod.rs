//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 유니크 키 |
//! |--------|--------|-----------|
//! | [`User`](users::User) | `users` | `username`, `email` |
//! | [`Blog`](blogs::Blog) | `blogs` | `slug` |
//! | [`Comment`](blogs::Comment) | `comments` | - |
//! | [`Category`](categories::Category) | `categories` | `slug` |
//! | [`Tag`](categories::Tag) | `tags` | `slug` |
//!
//! 모든 엔티티는 `Option<ObjectId>` 형태의 `_id`를 가지며, 저장 전에는 `None`입니다.
//! 엔티티 사이의 참조는 모두 `ObjectId`로 표현하고, 응답을 만들 때 서비스 계층에서 채워 넣습니다.

pub mod users;
pub mod blogs;
pub mod categories;
