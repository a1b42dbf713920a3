//! 블로그/댓글/카테고리 응답 DTO
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::common::to_utc;
use crate::domain::dto::users::UserSummary;
use crate::domain::entities::blogs::{Blog, Comment};
use crate::domain::entities::categories::Category;
use crate::domain::entities::users::ImageRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: category.title,
            slug: category.slug,
        }
    }
}

/// 카테고리 생성 결과 (`{title, slug}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedCategory {
    pub title: String,
    pub slug: String,
}

/// 블로그 전체 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub user: String,
    pub body: String,
    pub likes: Vec<String>,
    pub comments: Vec<String>,
    pub cover_image: ImageRef,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        let hex = |ids: &[ObjectId]| ids.iter().map(|id| id.to_hex()).collect::<Vec<_>>();

        Self {
            id: blog.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: blog.user.to_hex(),
            likes: hex(&blog.likes),
            comments: hex(&blog.comments),
            category: blog.category.map(|id| id.to_hex()),
            tags: hex(&blog.tags),
            created_at: to_utc(blog.created_at),
            updated_at: to_utc(blog.updated_at),
            title: blog.title,
            slug: blog.slug,
            body: blog.body,
            cover_image: blog.cover_image,
            featured: blog.featured,
        }
    }
}

/// 목록용 블로그 요약
///
/// 작성자와 카테고리가 채워져 있으며, 참조 대상이 사라졌으면 `null`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub slug: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub cover_image: ImageRef,
    pub user: Option<UserSummary>,
    pub category: Option<CategoryResponse>,
}

impl BlogListItem {
    pub fn new(blog: Blog, user: Option<UserSummary>, category: Option<CategoryResponse>) -> Self {
        Self {
            id: blog.id.map(|id| id.to_hex()).unwrap_or_default(),
            created_at: to_utc(blog.created_at),
            title: blog.title,
            body: blog.body,
            slug: blog.slug,
            cover_image: blog.cover_image,
            user,
            category,
        }
    }
}

/// 작성자가 채워진 댓글
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<UserSummary>,
    pub blog: String,
    pub body: String,
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: Comment, user: Option<UserSummary>) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            user,
            blog: comment.blog.to_hex(),
            body: comment.body,
            approved: comment.approved,
            created_at: to_utc(comment.created_at),
            updated_at: to_utc(comment.updated_at),
        }
    }
}
