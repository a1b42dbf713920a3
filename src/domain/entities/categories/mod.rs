//! Categories / Tags Entity Module
//!
//! 카테고리는 관리자가 만들고, 태그는 블로그 작성 시 이름만으로 즉석 생성됩니다.
//! 둘 다 제목과 제목에서 파생된 유니크 slug만 가집니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
}

impl Category {
    pub fn new(title: String, slug: String) -> Self {
        Self { id: None, title, slug }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
}

impl Tag {
    pub fn new(title: String, slug: String) -> Self {
        Self { id: None, title, slug }
    }
}
