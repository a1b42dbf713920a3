//! # 댓글 리포지토리 구현

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::blogs::Comment;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: Comment) -> AppResult<Comment>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Comment>>;

    /// 블로그의 댓글을 최신순으로 반환합니다. `approved_only`면 승인된 댓글만.
    async fn list_for_blog(&self, blog_id: &ObjectId, approved_only: bool) -> AppResult<Vec<Comment>>;

    /// 블로그의 모든 댓글을 삭제하고 삭제된 개수를 반환합니다.
    async fn delete_by_blog(&self, blog_id: &ObjectId) -> AppResult<u64>;

    /// 승인 플래그를 켭니다. 이미 승인된 댓글이면 그대로 반환합니다.
    async fn approve(&self, id: &ObjectId) -> AppResult<Option<Comment>>;
}

/// MongoDB `comments` 컬렉션 기반 구현
pub struct MongoCommentRepository {
    collection: Collection<Comment>,
}

impl MongoCommentRepository {
    pub const COLLECTION: &'static str = "comments";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Comment>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let blog_index = IndexModel::builder()
            .keys(doc! { "blog": 1, "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("blog_created_at".to_string())
                .build())
            .build();

        self.collection.create_index(blog_index).await?;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn insert(&self, mut comment: Comment) -> AppResult<Comment> {
        let result = self.collection.insert_one(&comment).await?;
        comment.id = result.inserted_id.as_object_id();
        Ok(comment)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Comment>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn list_for_blog(&self, blog_id: &ObjectId, approved_only: bool) -> AppResult<Vec<Comment>> {
        let mut filter = doc! { "blog": *blog_id };
        if approved_only {
            filter.insert("approved", true);
        }

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn delete_by_blog(&self, blog_id: &ObjectId) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! { "blog": *blog_id }).await?;
        Ok(result.deleted_count)
    }

    async fn approve(&self, id: &ObjectId) -> AppResult<Option<Comment>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let comment = self
            .collection
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": { "approved": true, "updatedAt": DateTime::now() } },
            )
            .with_options(options)
            .await?;

        Ok(comment)
    }
}
