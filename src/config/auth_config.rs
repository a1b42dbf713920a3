//! # Authentication Configuration Module
//!
//! JWT 토큰과 사용자 역할 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 이전 배포에서 사용하던 `JWT_CODE` 변수도 `JWT_SECRET`이 없을 때 비밀키로 읽습니다.
//! 같은 비밀키를 쓰는 한, 이전 서버가 발급한 토큰도 그대로 검증됩니다.

use std::env;

/// JWT 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 보안 요구사항
    ///
    /// - 최소 256비트 (32바이트) 길이
    /// - 환경별로 다른 키 사용
    ///
    /// # 기본값
    ///
    /// `JWT_SECRET`, `JWT_CODE` 둘 다 없으면 "your-secret-key"를 사용하며 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .or_else(|_| env::var("JWT_CODE"))
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// 기본값은 24시간이며, 0 이하의 값은 기본값으로 대체됩니다.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24)
    }
}

/// 사용자 역할 상수
///
/// 데이터베이스와 토큰 claim에 문자열로 저장됩니다.
pub struct Roles;

impl Roles {
    /// 가입 시 부여되는 기본 역할
    pub const USER: &'static str = "user";
    /// 관리자 라우트(`/admin/*`) 접근 역할
    pub const ADMIN: &'static str = "admin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiration_is_one_day() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_role_names() {
        assert_eq!(Roles::USER, "user");
        assert_eq!(Roles::ADMIN, "admin");
    }
}
