//! Blog Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::ImageRef;

/// 블로그 게시글 엔티티
///
/// `slug`는 생성 시 제목에서 파생되며 이후 변경되지 않습니다.
/// `featured`는 기존 데이터와 같이 0/1 정수로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    /// 작성자
    pub user: ObjectId,
    pub body: String,
    #[serde(default)]
    pub likes: Vec<ObjectId>,
    /// 작성 순서대로 쌓이는 댓글 목록
    #[serde(default)]
    pub comments: Vec<ObjectId>,
    #[serde(default)]
    pub cover_image: ImageRef,
    #[serde(default)]
    pub category: Option<ObjectId>,
    #[serde(default)]
    pub tags: Vec<ObjectId>,
    #[serde(default)]
    pub featured: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl Blog {
    pub fn new(
        title: String,
        slug: String,
        user: ObjectId,
        body: String,
        cover_image: ImageRef,
        category: ObjectId,
        tags: Vec<ObjectId>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            slug,
            user,
            body,
            likes: Vec::new(),
            comments: Vec::new(),
            cover_image,
            category: Some(category),
            tags,
            featured: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_featured(&self) -> bool {
        self.featured == 1
    }

    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user == user_id
    }
}
