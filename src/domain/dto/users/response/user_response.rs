use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::blogs::BlogResponse;
use crate::domain::dto::common::to_utc;
use crate::domain::entities::users::{CommentRequest, ImageRef, User};
use crate::domain::models::token::IssuedToken;

fn hex_ids(ids: &[ObjectId]) -> Vec<String> {
    ids.iter().map(|id| id.to_hex()).collect()
}

/// 다른 응답 안에 채워 넣는 작성자/팔로워 요약 (`username name profile`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub name: String,
    pub profile: ImageRef,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username.clone(),
            name: user.name.clone(),
            profile: user.profile.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequestResponse {
    pub comment_id: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&CommentRequest> for CommentRequestResponse {
    fn from(request: &CommentRequest) -> Self {
        Self {
            comment_id: request.comment_id.to_hex(),
            read: request.read,
            created_at: to_utc(request.created_at),
        }
    }
}

/// 사용자 응답 DTO (비밀번호 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub profile: ImageRef,
    pub blogs: Vec<String>,
    pub following: Vec<String>,
    pub followers: Vec<String>,
    pub comment_requests: Vec<CommentRequestResponse>,
    pub saved_blogs: Vec<String>,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            blogs: hex_ids(&user.blogs),
            following: hex_ids(&user.following),
            followers: hex_ids(&user.followers),
            comment_requests: user.comment_requests.iter().map(CommentRequestResponse::from).collect(),
            saved_blogs: hex_ids(&user.saved_blogs),
            created_at: to_utc(user.created_at),
            updated_at: to_utc(user.updated_at),
            name: user.name,
            username: user.username,
            email: user.email,
            profile: user.profile,
            role: user.role,
        }
    }
}

/// 공개 프로필 응답
///
/// 블로그는 최신순으로 채워지고, 팔로워/팔로잉은 요약 정보로 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub profile: ImageRef,
    pub blogs: Vec<BlogResponse>,
    pub following: Vec<UserSummary>,
    pub followers: Vec<UserSummary>,
    pub saved_blogs: Vec<String>,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfileResponse {
    pub fn new(
        user: User,
        blogs: Vec<BlogResponse>,
        following: Vec<UserSummary>,
        followers: Vec<UserSummary>,
    ) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            saved_blogs: hex_ids(&user.saved_blogs),
            created_at: to_utc(user.created_at),
            updated_at: to_utc(user.updated_at),
            name: user.name,
            username: user.username,
            email: user.email,
            profile: user.profile,
            blogs,
            following,
            followers,
            role: user.role,
        }
    }
}

/// 회원가입/로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub profile: ImageRef,
    pub token: String,
    /// 토큰 유효 기간 (초)
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: User, issued: IssuedToken) -> Self {
        Self {
            user_id: user.id_string().unwrap_or_default(),
            name: user.name,
            username: user.username,
            email: user.email,
            profile: user.profile,
            token: issued.token,
            expires_in: issued.expires_in,
        }
    }
}
