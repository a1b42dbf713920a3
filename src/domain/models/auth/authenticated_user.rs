use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 request extension에 넣어 두며, 핸들러는 extractor로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (hex 문자열)
    pub user_id: String,

    /// 토큰에 기록된 역할. 이전 서버가 발급한 토큰에는 없을 수 있습니다.
    pub role: Option<String>,
}

impl AuthenticatedUser {
    /// 토큰 subject를 ObjectId로 변환합니다.
    ///
    /// 서명은 맞지만 subject가 ObjectId가 아니면 위조 토큰과 같게 취급합니다.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::Unauthenticated("Token is invalid, Not authorized".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::Unauthenticated("No token, Not authorized".to_string()).into()
            )),
        }
    }
}
