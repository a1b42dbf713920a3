//! 카테고리 서비스 (생성은 관리자 전용 라우트에서만 호출)

use log::info;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::blogs::{CategoryResponse, CreatedCategory};
use crate::domain::entities::categories::Category;
use crate::repositories::Repositories;
use crate::services::blogs::unique_slug;

#[derive(Clone)]
pub struct CategoryService {
    repos: Repositories,
}

impl CategoryService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// 같은 제목의 카테고리가 있으면 `Category already exists`
    ///
    /// 제목은 앞뒤 공백을 제거한 뒤 검사하므로, 공백뿐인 제목은 거부됩니다.
    pub async fn create(&self, title: &str) -> AppResult<CreatedCategory> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::ValidationError("title is required".to_string()));
        }
        if self.repos.categories.exists_by_title(title).await? {
            return Err(AppError::Conflict("Category already exists".to_string()));
        }

        let categories = &self.repos.categories;
        let slug = unique_slug(title, |slug| async move { categories.slug_exists(&slug).await }).await?;
        let created = self
            .repos
            .categories
            .insert(Category::new(title.to_string(), slug))
            .await?;

        info!("🏷️ 카테고리 생성: {} ({})", created.title, created.slug);
        Ok(CreatedCategory {
            title: created.title,
            slug: created.slug,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryResponse>> {
        let categories = self.repos.categories.list_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }
}
