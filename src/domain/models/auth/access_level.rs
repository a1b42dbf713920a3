use crate::config::Roles;

/// 라우트가 요구하는 접근 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// 유효한 토큰이면 누구나
    Standard,
    /// 유효한 토큰 + `admin` 역할
    Privileged,
}

impl AccessLevel {
    /// 토큰의 역할이 이 접근 수준을 만족하는지 확인
    pub fn is_satisfied(&self, role: Option<&str>) -> bool {
        match self {
            AccessLevel::Standard => true,
            AccessLevel::Privileged => role == Some(Roles::ADMIN),
        }
    }
}
