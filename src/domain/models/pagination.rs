//! 목록 조회용 페이지네이션/정렬 모델
//!
//! 쿼리 문자열은 관대하게 해석합니다. 숫자가 아닌 `page`/`per_page`는 기본값으로 대체되고,
//! 0 이하의 `per_page`도 기본값 10이 됩니다. 반면 `page`가 0 이하이거나
//! 마지막 페이지를 넘으면 `Page number is out of bounds` 에러가 납니다.

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const DEFAULT_SORT: &str = "-createdAt";

/// 사용자 목록 정렬 허용 필드
pub const USER_SORT_FIELDS: &[&str] = &["createdAt", "updatedAt", "name", "username"];
/// 블로그 목록 정렬 허용 필드
pub const BLOG_SORT_FIELDS: &[&str] = &["createdAt", "updatedAt", "title"];

/// 목록 API의 원본 쿼리 파라미터
///
/// 모든 값은 문자열로 받아서 [`PageRequest::from_query`]에서 해석합니다.
/// 숫자 타입으로 받으면 `?page=abc`가 400이 되어 버리기 때문입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    /// 블로그 목록 전용. `all`이면 필터 없음
    pub category: Option<String>,
}

impl ListQuery {
    /// 카테고리 필터 slug. 없거나 `all`이면 `None`
    pub fn category_slug(&self) -> Option<&str> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(slug) => Some(slug),
        }
    }
}

/// `[-]field` 형태의 정렬 지정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn parse(raw: &str, allowed: &[&str]) -> AppResult<Self> {
        let raw = raw.trim();
        let (field, descending) = match raw.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        if !allowed.contains(&field) {
            return Err(AppError::ValidationError(format!(
                "Invalid sort field '{}', expected one of: {}",
                field,
                allowed.join(", ")
            )));
        }

        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }

    /// MongoDB 정렬 방향 (1 / -1)
    pub fn direction(&self) -> i32 {
        if self.descending { -1 } else { 1 }
    }
}

/// 해석이 끝난 페이지 요청
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
    pub sort: SortSpec,
}

impl PageRequest {
    pub fn from_query(query: &ListQuery, allowed_sort: &[&str]) -> AppResult<Self> {
        let page = parse_number(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = parse_number(query.per_page.as_deref())
            .filter(|per_page| *per_page > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        let sort_raw = query
            .sort
            .as_deref()
            .filter(|sort| !sort.trim().is_empty())
            .unwrap_or(DEFAULT_SORT);

        Ok(Self {
            page,
            per_page,
            sort: SortSpec::parse(sort_raw, allowed_sort)?,
        })
    }

    /// 전체 개수 기준으로 페이지 번호가 유효한지 검사합니다.
    ///
    /// 비어 있는 컬렉션은 1 이상의 어떤 페이지든 허용하고 빈 목록을 돌려줍니다.
    pub fn ensure_in_bounds(&self, total: u64) -> AppResult<()> {
        let out_of_bounds = || AppError::OutOfRange("Page number is out of bounds".to_string());

        if self.page <= 0 {
            return Err(out_of_bounds());
        }
        if total == 0 {
            return Ok(());
        }

        let last_page = total.div_ceil(self.per_page as u64);
        if self.page as u64 > last_page {
            return Err(out_of_bounds());
        }

        Ok(())
    }

    /// 건너뛸 문서 수. 아주 큰 페이지 번호도 넘치지 않고 `i64::MAX`에서 멈춥니다.
    pub fn skip(&self) -> u64 {
        (self.page.max(1) as u64 - 1)
            .saturating_mul(self.per_page as u64)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
