use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AccessLevel, AuthenticatedUser};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub level: AccessLevel,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let level = self.level;

        Box::pin(async move {
            match authenticate(&req, level) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {} ({:?})", user.user_id, level);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패 {} {}: {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더의 Bearer 토큰을 검증하고 접근 수준을 확인합니다.
fn authenticate(req: &ServiceRequest, level: AccessLevel) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
        .ok_or_else(|| AppError::Unauthenticated("No token, Not authorized".to_string()))?;

    let claims = token_service.verify(token)?;

    if !level.is_satisfied(claims.role.as_deref()) {
        return Err(AppError::AdminRequired("User is not an Admin!".to_string()));
    }

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
        role: claims.role,
    })
}
