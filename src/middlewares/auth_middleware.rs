//! JWT 인증 미들웨어 (Transform)
//!
//! 라우트마다 `wrap`으로 붙여 접근 수준을 지정합니다.
//!
//! ```rust,ignore
//! #[get("/details", wrap = "AuthMiddleware::standard()")]
//! async fn details(user: AuthenticatedUser) -> Result<HttpResponse, AppError> { ... }
//!
//! #[put("/blogs/feature/{slug}", wrap = "AuthMiddleware::privileged()")]
//! async fn toggle_featured(...) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! | 상황 | 응답 |
//! |------|------|
//! | `Authorization: Bearer` 헤더 없음 | 401 `No token, Not authorized` |
//! | 서명 불일치, 만료, 형식 오류 | 401 `Token is invalid, Not authorized` |
//! | 관리자 라우트, `admin` 역할 아님 | 401 `User is not an Admin!` |

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AccessLevel;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    level: AccessLevel,
}

impl AuthMiddleware {
    pub fn new(level: AccessLevel) -> Self {
        Self { level }
    }

    /// 유효한 토큰이면 통과
    pub fn standard() -> Self {
        Self::new(AccessLevel::Standard)
    }

    /// 유효한 토큰 + `admin` 역할
    pub fn privileged() -> Self {
        Self::new(AccessLevel::Privileged)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            level: self.level,
        }))
    }
}
