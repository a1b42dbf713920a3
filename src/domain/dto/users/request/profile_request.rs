//! 팔로우/프로필 수정 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 팔로우/언팔로우 대상
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FollowRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "target is required"))]
    pub target: String,
}

/// 프로필 수정 요청
///
/// 비어 있거나 빠진 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
