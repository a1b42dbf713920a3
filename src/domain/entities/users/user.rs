//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션의 문서 구조와 1:1로 매핑되며, 필드 이름은 기존 데이터와 호환되도록
//! `password`, `createdAt`, `updatedAt`을 그대로 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::Roles;

/// 업로드된 이미지 참조 (프로필, 블로그 커버)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub public_id: String,
}

impl ImageRef {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: String::new(),
        }
    }
}

/// 내 블로그에 댓글이 달렸을 때 쌓이는 승인 대기 알림
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment_id: ObjectId,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime,
}

impl CommentRequest {
    pub fn unread(comment_id: ObjectId) -> Self {
        Self {
            comment_id,
            read: false,
            created_at: DateTime::now(),
        }
    }
}

/// 사용자 엔티티
///
/// 사용자는 삭제되지 않으며, 팔로우/저장/블로그 목록은 모두 ObjectId 집합으로 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    #[serde(rename = "password")]
    pub password_hash: String,
    /// 작성한 블로그 목록
    #[serde(default)]
    pub blogs: Vec<ObjectId>,
    #[serde(default)]
    pub profile: ImageRef,
    #[serde(default)]
    pub following: Vec<ObjectId>,
    #[serde(default)]
    pub followers: Vec<ObjectId>,
    #[serde(default)]
    pub comment_requests: Vec<CommentRequest>,
    #[serde(default)]
    pub saved_blogs: Vec<ObjectId>,
    /// 사용자 역할 (`user` 또는 `admin`)
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

fn default_role() -> String {
    Roles::USER.to_string()
}

impl User {
    /// 새 사용자 생성
    ///
    /// 관계 목록은 모두 비어 있고, 역할은 기본값 `user`입니다.
    pub fn new(name: String, username: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            username,
            email,
            password_hash,
            blogs: Vec::new(),
            profile: ImageRef::default(),
            following: Vec::new(),
            followers: Vec::new(),
            comment_requests: Vec::new(),
            saved_blogs: Vec::new(),
            role: default_role(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
