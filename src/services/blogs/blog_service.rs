//! # 블로그 서비스 구현
//!
//! 블로그 작성/조회/삭제, 카테고리별 목록, 추천(featured) 토글을 담당합니다.
//!
//! 삭제는 블로그 → 댓글 → 작성자의 `blogs` → 모든 사용자의 `saved_blogs` 순서로
//! 정리하며, 중간에 실패해도 되돌리지 않습니다.

use std::collections::HashMap;
use std::future::Future;

use log::info;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::blogs::{BlogListItem, BlogResponse, CategoryResponse, CreateBlogRequest};
use crate::domain::dto::users::UserSummary;
use crate::domain::entities::blogs::Blog;
use crate::domain::entities::categories::{Category, Tag};
use crate::domain::entities::users::{ImageRef, User};
use crate::domain::models::pagination::{ListQuery, PageRequest, BLOG_SORT_FIELDS};
use crate::repositories::blogs::BlogFilter;
use crate::repositories::users::UserSet;
use crate::repositories::Repositories;
use crate::utils::string_utils::{slugify, with_random_suffix};

/// 접미사를 붙여 다시 시도하는 최대 횟수
const SLUG_ATTEMPTS: usize = 5;

/// 제목에서 아직 쓰이지 않은 slug를 만듭니다.
///
/// 기본 slug가 비었거나 이미 있으면 `-` + 16진수 8자리를 붙여 다시 확인합니다.
pub(crate) async fn unique_slug<F, Fut>(title: &str, exists: F) -> AppResult<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let base = slugify(title);
    if !base.is_empty() && !exists(base.clone()).await? {
        return Ok(base);
    }

    for _ in 0..SLUG_ATTEMPTS {
        let candidate = with_random_suffix(&base);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }

    Err(AppError::InternalError(format!(
        "slug 생성 실패 ({}회 충돌): {}",
        SLUG_ATTEMPTS, base
    )))
}

/// 블로그 목록에 작성자(`username profile name`)와 카테고리(`title slug`)를 채웁니다.
///
/// 입력 순서를 유지하며, 참조 대상이 사라졌으면 해당 필드는 `None`입니다.
pub(crate) async fn populate_list_items(
    repos: &Repositories,
    blogs: Vec<Blog>,
) -> AppResult<Vec<BlogListItem>> {
    let mut user_ids: Vec<ObjectId> = blogs.iter().map(|blog| blog.user).collect();
    user_ids.sort();
    user_ids.dedup();
    let mut category_ids: Vec<ObjectId> = blogs.iter().filter_map(|blog| blog.category).collect();
    category_ids.sort();
    category_ids.dedup();

    let users: HashMap<ObjectId, User> = repos
        .users
        .find_many(&user_ids)
        .await?
        .into_iter()
        .filter_map(|user| user.id.map(|id| (id, user)))
        .collect();
    let categories: HashMap<ObjectId, Category> = repos
        .categories
        .find_many(&category_ids)
        .await?
        .into_iter()
        .filter_map(|category| category.id.map(|id| (id, category)))
        .collect();

    Ok(blogs
        .into_iter()
        .map(|blog| {
            let user = users.get(&blog.user).map(UserSummary::from);
            let category = blog
                .category
                .and_then(|id| categories.get(&id))
                .cloned()
                .map(CategoryResponse::from);
            BlogListItem::new(blog, user, category)
        })
        .collect())
}

#[derive(Clone)]
pub struct BlogService {
    repos: Repositories,
}

impl BlogService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// 새 블로그 작성
    ///
    /// # 처리 과정
    ///
    /// 1. 필수 필드 확인 (`All fields are required`)
    /// 2. 카테고리 ObjectId 확인 (`No category found`)
    /// 3. 태그 제목을 찾거나 새로 생성
    /// 4. 유니크 slug로 저장 후 작성자의 `blogs`에 추가
    pub async fn create(&self, owner: &ObjectId, request: CreateBlogRequest) -> AppResult<Blog> {
        let new_blog = request
            .complete()
            .ok_or_else(|| AppError::MissingField("All fields are required".to_string()))?;

        let category_id = self.resolve_category_id(&new_blog.category).await?;

        if self.repos.users.find_by_id(owner).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let mut tag_ids = Vec::with_capacity(new_blog.tags.len());
        for title in &new_blog.tags {
            let tag_id = self.find_or_create_tag(title).await?;
            if !tag_ids.contains(&tag_id) {
                tag_ids.push(tag_id);
            }
        }

        let blogs = &self.repos.blogs;
        let slug = unique_slug(&new_blog.title, |slug| async move {
            blogs.slug_exists(&slug).await
        })
        .await?;

        let blog = Blog::new(
            new_blog.title,
            slug,
            *owner,
            new_blog.body,
            ImageRef::from_url(new_blog.image_url),
            category_id,
            tag_ids,
        );
        let created = self.repos.blogs.insert(blog).await?;

        if let Some(blog_id) = created.id {
            self.repos.users.add_to_set(owner, UserSet::Blogs, blog_id).await?;
        }

        info!("📝 블로그 작성: {} (작성자 {})", created.slug, owner);
        Ok(created)
    }

    async fn resolve_category_id(&self, raw: &str) -> AppResult<ObjectId> {
        let no_category = || AppError::UnknownReference("No category found".to_string());

        let id = ObjectId::parse_str(raw.trim()).map_err(|_| no_category())?;
        self.repos
            .categories
            .find_by_id(&id)
            .await?
            .and_then(|category| category.id)
            .ok_or_else(no_category)
    }

    async fn find_or_create_tag(&self, title: &str) -> AppResult<ObjectId> {
        if let Some(id) = self.repos.tags.find_by_title(title).await?.and_then(|tag| tag.id) {
            return Ok(id);
        }

        let tags = &self.repos.tags;
        let slug = unique_slug(title, |slug| async move { tags.slug_exists(&slug).await }).await?;
        let created = self.repos.tags.insert(Tag::new(title.to_string(), slug)).await?;

        created
            .id
            .ok_or_else(|| AppError::InternalError("저장된 태그에 _id가 없습니다".to_string()))
    }

    /// 블로그 목록 (페이지네이션, `category` 필터)
    ///
    /// 페이지 범위는 필터가 적용된 개수로 검사합니다.
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<BlogListItem>> {
        let page = PageRequest::from_query(query, BLOG_SORT_FIELDS)?;

        let filter = match query.category_slug() {
            None => BlogFilter::all(),
            Some(slug) => {
                let category_id = self
                    .repos
                    .categories
                    .find_by_slug(slug)
                    .await?
                    .and_then(|category| category.id)
                    .ok_or_else(|| AppError::UnknownReference("No category found".to_string()))?;
                BlogFilter::in_category(category_id)
            }
        };

        let total = self.repos.blogs.count(&filter).await?;
        page.ensure_in_bounds(total)?;
        if total == 0 {
            return Ok(Vec::new());
        }

        let blogs = self.repos.blogs.list(&filter, &page).await?;
        populate_list_items(&self.repos, blogs).await
    }

    pub async fn get(&self, slug: &str) -> AppResult<BlogResponse> {
        self.repos
            .blogs
            .find_by_slug(slug)
            .await?
            .map(BlogResponse::from)
            .ok_or_else(|| AppError::NotFound("No Blog Found".to_string()))
    }

    /// 작성자만 삭제할 수 있습니다. 댓글과 모든 참조가 함께 정리됩니다.
    pub async fn delete(&self, user_id: &ObjectId, slug: &str) -> AppResult<()> {
        let blog = self
            .repos
            .blogs
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::UnknownReference("Blog does not exists".to_string()))?;

        if !blog.is_owned_by(user_id) {
            return Err(AppError::Forbidden("You are not authorized".to_string()));
        }
        let blog_id = blog
            .id
            .ok_or_else(|| AppError::InternalError("저장된 블로그에 _id가 없습니다".to_string()))?;

        self.repos.blogs.delete_by_id(&blog_id).await?;
        let removed_comments = self.repos.comments.delete_by_blog(&blog_id).await?;
        self.repos.users.pull(&blog.user, UserSet::Blogs, blog_id).await?;
        let unsaved = self.repos.users.pull_saved_blog_everywhere(&blog_id).await?;

        info!(
            "🗑️ 블로그 삭제: {} (댓글 {}개, 북마크 {}건 정리)",
            slug, removed_comments, unsaved
        );
        Ok(())
    }

    /// 추천 여부를 뒤집고 새 상태를 반환합니다. (`true` = 추천됨)
    pub async fn toggle_featured(&self, slug: &str) -> AppResult<bool> {
        let blog = self
            .repos
            .blogs
            .toggle_featured(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("No Blog Found".to_string()))?;

        info!("⭐ 추천 상태 변경: {} → {}", slug, blog.featured);
        Ok(blog.is_featured())
    }
}
