//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **집합 연산**: 팔로우/저장 목록은 `$addToSet`/`$pull`로 원자적으로 갱신
//! - **단일 왕복 갱신**: 모든 변경은 `find_one_and_update` + `ReturnDocument::After`
//! - **데이터 무결성**: `username`, `email` 유니크 인덱스

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{CommentRequest, User};
use crate::domain::models::pagination::PageRequest;
use crate::repositories::{map_write_error, sort_document};

/// 사용자 문서 안의 ObjectId 집합 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSet {
    Following,
    Followers,
    SavedBlogs,
    Blogs,
}

impl UserSet {
    pub fn field(&self) -> &'static str {
        match self {
            UserSet::Following => "following",
            UserSet::Followers => "followers",
            UserSet::SavedBlogs => "saved_blogs",
            UserSet::Blogs => "blogs",
        }
    }
}

/// `{ <operator>: { <set>: value }, $set: { updatedAt } }` 갱신 문서
fn set_update(operator: &str, set: UserSet, value: ObjectId) -> Document {
    let mut target = Document::new();
    target.insert(set.field(), value);

    let mut update = Document::new();
    update.insert(operator, target);
    update.insert("$set", doc! { "updatedAt": DateTime::now() });
    update
}

/// 사용자 데이터 액세스 계약
///
/// 모든 메서드는 `AppResult`를 반환하며, 저장소 오류는 `DatabaseError`,
/// 유니크 제약 위반은 `Conflict`로 변환됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 `_id`가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 사용자명 또는 이메일이 `login`과 일치하는 사용자
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 주어진 ID 중 존재하는 사용자들 (순서 보장 없음)
    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<User>>;

    async fn count(&self) -> AppResult<u64>;

    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>>;

    /// 이름/프로필 이미지를 한 번에 갱신합니다. `None`인 필드는 그대로 둡니다.
    async fn update_profile(
        &self,
        id: &ObjectId,
        name: Option<&str>,
        profile_url: Option<&str>,
    ) -> AppResult<Option<User>>;

    /// 집합 필드에 값을 추가합니다. 이미 있으면 변화 없음.
    async fn add_to_set(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>>;

    /// 집합 필드에서 값을 제거합니다. 없으면 변화 없음.
    async fn pull(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>>;

    async fn push_comment_request(&self, id: &ObjectId, request: CommentRequest) -> AppResult<()>;

    /// 모든 사용자의 `saved_blogs`에서 블로그를 제거하고 변경된 문서 수를 반환합니다.
    async fn pull_saved_blog_everywhere(&self, blog_id: &ObjectId) -> AppResult<u64>;
}

/// MongoDB `users` 컬렉션 기반 구현
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    fn after_update() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    async fn update_one_returning(&self, id: &ObjectId, update: Document) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one_and_update(doc! { "_id": *id }, update)
            .with_options(Self::after_update())
            .await?;

        Ok(user)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, "User with this username or email already exists"))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "username": username }).await?)
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let filter = doc! { "$or": [{ "username": login }, { "email": login }] };
        Ok(self.collection.find_one(filter).await?)
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count = self.collection.count_documents(doc! { "username": username }).await?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection.count_documents(doc! { "email": email }).await?;
        Ok(count > 0)
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(sort_document(&page.sort))
            .skip(page.skip())
            .limit(page.limit())
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        name: Option<&str>,
        profile_url: Option<&str>,
    ) -> AppResult<Option<User>> {
        let mut set = doc! { "updatedAt": DateTime::now() };
        if let Some(name) = name {
            set.insert("name", name);
        }
        if let Some(url) = profile_url {
            set.insert("profile", doc! { "url": url, "public_id": "" });
        }

        self.update_one_returning(id, doc! { "$set": set }).await
    }

    async fn add_to_set(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>> {
        self.update_one_returning(id, set_update("$addToSet", set, value)).await
    }

    async fn pull(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>> {
        self.update_one_returning(id, set_update("$pull", set, value)).await
    }

    async fn push_comment_request(&self, id: &ObjectId, request: CommentRequest) -> AppResult<()> {
        let request = mongodb::bson::to_document(&request)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.collection
            .update_one(doc! { "_id": *id }, doc! { "$push": { "comment_requests": request } })
            .await?;

        Ok(())
    }

    async fn pull_saved_blog_everywhere(&self, blog_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "saved_blogs": *blog_id },
                doc! { "$pull": { "saved_blogs": *blog_id } },
            )
            .await?;

        Ok(result.modified_count)
    }
}
