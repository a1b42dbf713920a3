//! # 블로그 리포지토리 구현
//!
//! `blogs` 컬렉션의 데이터 액세스 계층입니다.
//! featured 토글은 업데이트 파이프라인(`featured = 1 - featured`)을 사용해
//! 조회와 갱신을 한 번의 원자적 연산으로 처리합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::blogs::Blog;
use crate::domain::models::pagination::PageRequest;
use crate::repositories::{map_write_error, sort_document};

/// 블로그 목록 필터
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// 작성자
    pub owner: Option<ObjectId>,
    pub category: Option<ObjectId>,
}

impl BlogFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owned_by(owner: ObjectId) -> Self {
        Self { owner: Some(owner), category: None }
    }

    pub fn in_category(category: ObjectId) -> Self {
        Self { owner: None, category: Some(category) }
    }

    pub fn matches(&self, blog: &Blog) -> bool {
        self.owner.is_none_or(|owner| blog.user == owner)
            && self.category.is_none_or(|category| blog.category == Some(category))
    }

    fn to_document(self) -> Document {
        let mut filter = Document::new();
        if let Some(owner) = self.owner {
            filter.insert("user", owner);
        }
        if let Some(category) = self.category {
            filter.insert("category", category);
        }
        filter
    }
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// 새 블로그를 저장합니다. slug 중복은 `Conflict`
    async fn insert(&self, blog: Blog) -> AppResult<Blog>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Blog>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Blog>>;

    async fn slug_exists(&self, slug: &str) -> AppResult<bool>;

    async fn count(&self, filter: &BlogFilter) -> AppResult<u64>;

    async fn list(&self, filter: &BlogFilter, page: &PageRequest) -> AppResult<Vec<Blog>>;

    /// 주어진 ID 중 존재하는 블로그들 (순서 보장 없음)
    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Blog>>;

    /// 삭제되었으면 `true`
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool>;

    async fn push_comment(&self, blog_id: &ObjectId, comment_id: ObjectId) -> AppResult<()>;

    /// featured 플래그를 0 ⇄ 1로 뒤집고 갱신된 문서를 반환합니다.
    async fn toggle_featured(&self, slug: &str) -> AppResult<Option<Blog>>;
}

/// MongoDB `blogs` 컬렉션 기반 구현
pub struct MongoBlogRepository {
    collection: Collection<Blog>,
}

impl MongoBlogRepository {
    pub const COLLECTION: &'static str = "blogs";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Blog>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "user": 1, "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("user_created_at".to_string())
                .build())
            .build();

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder()
                .name("category".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([slug_index, owner_index, category_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn insert(&self, mut blog: Blog) -> AppResult<Blog> {
        let result = self
            .collection
            .insert_one(&blog)
            .await
            .map_err(|e| map_write_error(e, "Blog with this slug already exists"))?;

        blog.id = result.inserted_id.as_object_id();
        Ok(blog)
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Blog>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Blog>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.collection.count_documents(doc! { "slug": slug }).await? > 0)
    }

    async fn count(&self, filter: &BlogFilter) -> AppResult<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn list(&self, filter: &BlogFilter, page: &PageRequest) -> AppResult<Vec<Blog>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(sort_document(&page.sort))
            .skip(page.skip())
            .limit(page.limit())
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Blog>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn push_comment(&self, blog_id: &ObjectId, comment_id: ObjectId) -> AppResult<()> {
        self.collection
            .update_one(
                doc! { "_id": *blog_id },
                doc! {
                    "$push": { "comments": comment_id },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .await?;

        Ok(())
    }

    async fn toggle_featured(&self, slug: &str) -> AppResult<Option<Blog>> {
        let pipeline = vec![doc! {
            "$set": {
                "featured": { "$subtract": [1, { "$ifNull": ["$featured", 0] }] },
                "updatedAt": "$$NOW",
            }
        }];

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let blog = self
            .collection
            .find_one_and_update(doc! { "slug": slug }, pipeline)
            .with_options(options)
            .await?;

        Ok(blog)
    }
}
