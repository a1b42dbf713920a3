//! 댓글 서비스
//!
//! 새 댓글은 승인 전까지 블로그 작성자에게만 보입니다.
//! 작성 시 블로그의 `comments`와 작성자의 `comment_requests`에 각각 한 번씩 기록하며,
//! 두 쓰기는 서로 독립적입니다.

use std::collections::HashMap;

use log::info;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::blogs::CommentResponse;
use crate::domain::dto::users::UserSummary;
use crate::domain::entities::blogs::{Blog, Comment};
use crate::domain::entities::users::{CommentRequest, User};
use crate::repositories::Repositories;

#[derive(Clone)]
pub struct CommentService {
    repos: Repositories,
}

impl CommentService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    async fn blog_by_slug(&self, slug: &str) -> AppResult<Blog> {
        self.repos
            .blogs
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::UnknownReference("The blog does not exists".to_string()))
    }

    /// 블로그의 댓글 목록 (최신순, 작성자 포함)
    ///
    /// 블로그 작성자는 전부, 그 외 사용자는 승인된 댓글만 봅니다.
    pub async fn list_for_blog(&self, viewer: &ObjectId, slug: &str) -> AppResult<Vec<CommentResponse>> {
        let blog = self.blog_by_slug(slug).await?;
        let blog_id = blog
            .id
            .ok_or_else(|| AppError::InternalError("저장된 블로그에 _id가 없습니다".to_string()))?;

        let approved_only = !blog.is_owned_by(viewer);
        let comments = self.repos.comments.list_for_blog(&blog_id, approved_only).await?;

        let mut author_ids: Vec<ObjectId> = comments.iter().map(|comment| comment.user).collect();
        author_ids.sort();
        author_ids.dedup();
        let authors: HashMap<ObjectId, User> = self
            .repos
            .users
            .find_many(&author_ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.user).map(UserSummary::from);
                CommentResponse::new(comment, author)
            })
            .collect())
    }

    /// 댓글 작성
    ///
    /// 댓글 id를 블로그에 추가하고, 블로그 작성자에게 읽지 않은 댓글 알림을 남깁니다.
    pub async fn create(&self, author: &ObjectId, slug: &str, body: String) -> AppResult<Comment> {
        let blog = self.blog_by_slug(slug).await?;
        let blog_id = blog
            .id
            .ok_or_else(|| AppError::InternalError("저장된 블로그에 _id가 없습니다".to_string()))?;

        let comment = self
            .repos
            .comments
            .insert(Comment::new(*author, blog_id, body))
            .await?;
        let comment_id = comment
            .id
            .ok_or_else(|| AppError::InternalError("저장된 댓글에 _id가 없습니다".to_string()))?;

        self.repos.blogs.push_comment(&blog_id, comment_id).await?;
        self.repos
            .users
            .push_comment_request(&blog.user, CommentRequest::unread(comment_id))
            .await?;

        info!("💬 댓글 작성: {} (블로그 {})", comment_id, slug);
        Ok(comment)
    }

    /// 댓글 승인 (블로그 작성자만 가능, 되돌릴 수 없음)
    pub async fn approve(&self, user_id: &ObjectId, comment_id: &str) -> AppResult<()> {
        let missing_comment = || AppError::UnknownReference("The comment does not exists".to_string());

        let comment_id = ObjectId::parse_str(comment_id.trim()).map_err(|_| missing_comment())?;
        let comment = self
            .repos
            .comments
            .find_by_id(&comment_id)
            .await?
            .ok_or_else(missing_comment)?;

        let blog = self
            .repos
            .blogs
            .find_by_id(&comment.blog)
            .await?
            .ok_or_else(|| AppError::UnknownReference("Blog not found".to_string()))?;

        if !blog.is_owned_by(user_id) {
            return Err(AppError::Forbidden(
                "Blog does not belongs to the current user".to_string(),
            ));
        }

        self.repos
            .comments
            .approve(&comment_id)
            .await?
            .ok_or_else(missing_comment)?;

        info!("✅ 댓글 승인: {} (블로그 {})", comment_id, blog.slug);
        Ok(())
    }
}
