//! # 카테고리/태그 리포지토리 구현
//!
//! 두 컬렉션 모두 `{title, slug}`만 가지며 slug에 유니크 인덱스가 있습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::categories::{Category, Tag};
use crate::repositories::map_write_error;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: Category) -> AppResult<Category>;

    async fn exists_by_title(&self, title: &str) -> AppResult<bool>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Category>>;

    async fn slug_exists(&self, slug: &str) -> AppResult<bool>;

    async fn list_all(&self) -> AppResult<Vec<Category>>;

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Category>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Tag>>;

    async fn insert(&self, tag: Tag) -> AppResult<Tag>;

    async fn slug_exists(&self, slug: &str) -> AppResult<bool>;
}

fn slug_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "slug": 1 })
        .options(IndexOptions::builder()
            .unique(true)
            .name("slug_unique".to_string())
            .build())
        .build()
}

/// MongoDB `categories` 컬렉션 기반 구현
pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub const COLLECTION: &'static str = "categories";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Category>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        self.collection.create_index(slug_index()).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn insert(&self, mut category: Category) -> AppResult<Category> {
        let result = self
            .collection
            .insert_one(&category)
            .await
            .map_err(|e| map_write_error(e, "Category already exists"))?;

        category.id = result.inserted_id.as_object_id();
        Ok(category)
    }

    async fn exists_by_title(&self, title: &str) -> AppResult<bool> {
        Ok(self.collection.count_documents(doc! { "title": title }).await? > 0)
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.collection.count_documents(doc! { "slug": slug }).await? > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// MongoDB `tags` 컬렉션 기반 구현
pub struct MongoTagRepository {
    collection: Collection<Tag>,
}

impl MongoTagRepository {
    pub const COLLECTION: &'static str = "tags";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Tag>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        self.collection.create_index(slug_index()).await?;
        Ok(())
    }
}

#[async_trait]
impl TagRepository for MongoTagRepository {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Tag>> {
        Ok(self.collection.find_one(doc! { "title": title }).await?)
    }

    async fn insert(&self, mut tag: Tag) -> AppResult<Tag> {
        let result = self
            .collection
            .insert_one(&tag)
            .await
            .map_err(|e| map_write_error(e, "Tag already exists"))?;

        tag.id = result.inserted_id.as_object_id();
        Ok(tag)
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.collection.count_documents(doc! { "slug": slug }).await? > 0)
    }
}
