//! # 문자열 유틸리티
//!
//! 제목에서 URL-safe slug를 만드는 함수들입니다.

use uuid::Uuid;

/// 충돌 회피용 접미사 길이 (16진수 문자 수)
pub const SUFFIX_LEN: usize = 8;

/// 제목을 slug로 변환
///
/// ASCII 영문/숫자만 소문자로 남기고, 그 외 문자의 연속은 `-` 하나로 합치며,
/// 앞뒤의 `-`는 제거합니다. 남는 문자가 없으면(예: 한글 제목) 빈 문자열을 반환하며,
/// 호출 측은 이때 무작위 접미사만으로 slug를 만듭니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::slugify;
///
/// assert_eq!(slugify("  Hello, World!  "), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// slug 뒤에 `-` + 무작위 16진수 8자리를 붙입니다.
///
/// slug가 비어 있으면 접미사만 반환합니다.
pub fn with_random_suffix(slug: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    let suffix = &random[..SUFFIX_LEN];

    if slug.is_empty() {
        suffix.to_string()
    } else {
        format!("{}-{}", slug, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
        assert_eq!(slugify("Rust 2024 Edition"), "rust-2024-edition");
        assert_eq!(slugify("--already-slugged--"), "already-slugged");
    }

    #[test]
    fn test_slugify_is_url_safe() {
        assert_eq!(slugify("러스트 입문"), "");
        assert_eq!(slugify("Rust 러스트 입문"), "rust");
        assert_eq!(slugify("Café Crème"), "caf-cr-me");

        let slug = slugify("Ünïcödé & 한글 Title 2");
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_slugify_without_alphanumerics_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_with_random_suffix() {
        let slug = with_random_suffix("hello-world");
        let (base, suffix) = slug.rsplit_once('-').unwrap();

        assert_eq!(base, "hello-world");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(with_random_suffix("hello-world"), slug);
    }

    #[test]
    fn test_with_random_suffix_on_empty_slug() {
        let slug = with_random_suffix("");

        assert_eq!(slug.len(), SUFFIX_LEN);
        assert!(!slug.starts_with('-'));
    }
}
