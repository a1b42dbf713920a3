use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 블로그 댓글
///
/// 새 댓글은 미승인 상태로 시작하며, 블로그 작성자가 승인하면 모두에게 공개됩니다.
/// 승인은 되돌릴 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub blog: ObjectId,
    pub body: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(user: ObjectId, blog: ObjectId, body: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user,
            blog,
            body,
            approved: false,
            created_at: now,
            updated_at: now,
        }
    }
}
