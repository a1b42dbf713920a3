//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JSON Web Token의 발급과 검증을 담당합니다.
//! 상태를 저장하지 않으며, 토큰 폐기 목록도 두지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::token::{IssuedToken, TokenClaims};

/// 토큰 검증/발급 실패
#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    /// 서명 불일치, 형식 오류
    #[error("invalid token")]
    Invalid,
    #[error("expired token")]
    Expired,
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid | TokenError::Expired => {
                AppError::Unauthenticated("Token is invalid, Not authorized".to_string())
            }
            TokenError::Signing(message) => AppError::InternalError(message),
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// 비밀키와 유효 기간은 생성 시 고정됩니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`(또는 `JWT_CODE`)와 `JWT_EXPIRATION_HOURS`로 생성
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 토큰 유효 기간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `TokenError::Signing` - 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue(&user_id, Some("user"))?;
    /// println!("Expires in: {} seconds", issued.expires_in);
    /// ```
    pub fn issue(&self, subject_id: &str, role: Option<&str>) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            user_id: subject_id.to_string(),
            role: role.map(str::to_string),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.expires_in(),
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료는 `Expired`, 그 밖의 모든 실패는 `Invalid`로 구분합니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰 부분 추출
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
