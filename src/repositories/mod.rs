//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션마다 `async_trait` 기반 계약(trait)과 두 가지 구현을 제공합니다.
//!
//! - **MongoDB 구현** (`Mongo*Repository`) - 운영 환경
//! - **인메모리 구현** ([`memory`]) - 통합 테스트, 로컬 데모
//!
//! 서비스 계층은 [`Repositories`] 묶음을 통해 `Arc<dyn ...>`만 알고 있으므로,
//! 어느 구현이 주입되었는지 신경 쓰지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::name()).await?;
//! let repositories = Repositories::mongo(&database).await?;
//! let user = repositories.users.find_by_username("alice").await?;
//! ```

use std::sync::Arc;

use log::info;
use mongodb::bson::Document;
use mongodb::error::{ErrorKind, WriteFailure};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::models::pagination::SortSpec;

pub mod users;
pub mod blogs;
pub mod categories;
pub mod memory;

use blogs::{BlogRepository, CommentRepository, MongoBlogRepository, MongoCommentRepository};
use categories::{CategoryRepository, MongoCategoryRepository, MongoTagRepository, TagRepository};
use users::{MongoUserRepository, UserRepository};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// 서비스 계층에 주입되는 리포지토리 묶음
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
}

impl Repositories {
    /// MongoDB 리포지토리를 만들고 유니크 인덱스를 보장합니다.
    pub async fn mongo(db: &Database) -> AppResult<Self> {
        let users = MongoUserRepository::new(db);
        let blogs = MongoBlogRepository::new(db);
        let comments = MongoCommentRepository::new(db);
        let categories = MongoCategoryRepository::new(db);
        let tags = MongoTagRepository::new(db);

        users.create_indexes().await?;
        blogs.create_indexes().await?;
        comments.create_indexes().await?;
        categories.create_indexes().await?;
        tags.create_indexes().await?;
        info!("📇 MongoDB 인덱스 확인 완료: {}", db.database_name());

        Ok(Self {
            users: Arc::new(users),
            blogs: Arc::new(blogs),
            comments: Arc::new(comments),
            categories: Arc::new(categories),
            tags: Arc::new(tags),
        })
    }

    /// 비어 있는 인메모리 저장소
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(memory::InMemoryUserRepository::default()),
            blogs: Arc::new(memory::InMemoryBlogRepository::default()),
            comments: Arc::new(memory::InMemoryCommentRepository::default()),
            categories: Arc::new(memory::InMemoryCategoryRepository::default()),
            tags: Arc::new(memory::InMemoryTagRepository::default()),
        }
    }
}

/// 쓰기 에러를 `AppError`로 변환합니다. 중복 키는 `Conflict`가 됩니다.
pub(crate) fn map_write_error(err: mongodb::error::Error, conflict_message: &str) -> AppError {
    if is_duplicate_key(&err) {
        AppError::Conflict(conflict_message.to_string())
    } else {
        AppError::from(err)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// `{ <field>: 1 | -1 }` 정렬 문서
pub(crate) fn sort_document(sort: &SortSpec) -> Document {
    let mut document = Document::new();
    document.insert(sort.field.as_str(), sort.direction());
    document
}
