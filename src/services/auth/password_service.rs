//! 비밀번호 해싱 서비스
//!
//! bcrypt로 해시를 만들고 검증합니다. 같은 평문이라도 호출마다 다른 salt가 쓰입니다.

use bcrypt::{hash, verify};

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, ErrorContext};

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경 기본값으로 생성
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        hash(plaintext, self.cost).context("비밀번호 해싱 실패")
    }

    /// 평문이 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 깨져 있으면 데이터 무결성 문제이므로 `InternalError`를 반환합니다.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AppError> {
        verify(plaintext, digest).context("저장된 비밀번호 해시 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_and_verifiable() {
        let service = PasswordService::new(4);
        let first = service.hash("password123").unwrap();
        let second = service.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("password123", &first).unwrap());
        assert!(!service.verify("password124", &first).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        let service = PasswordService::new(4);

        assert!(matches!(
            service.verify("password123", "not-a-bcrypt-hash"),
            Err(AppError::InternalError(_))
        ));
    }
}
