//! 블로그/댓글/카테고리 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 블로그 작성 요청
///
/// 필수 필드가 하나라도 비어 있으면 `All fields are required`로 거부하므로,
/// 모든 필드를 `Option`으로 받아 서비스 계층에서 한 번에 검사합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    /// 카테고리 ObjectId (hex)
    pub category: Option<String>,
    /// 태그 제목 목록. 없는 태그는 새로 만듭니다.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 필수 필드가 모두 채워진 블로그 작성 요청
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl CreateBlogRequest {
    /// 필수 필드가 모두 있으면 [`NewBlog`]로 변환합니다.
    pub fn complete(self) -> Option<NewBlog> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|value| !value.trim().is_empty())
        }

        Some(NewBlog {
            title: present(self.title)?,
            body: present(self.body)?,
            image_url: present(self.image_url)?,
            category: present(self.category)?,
            tags: self
                .tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        })
    }
}

/// 댓글 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Comment body is required"))]
    pub body: String,
}

/// 카테고리 생성 요청 (관리자)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
}
