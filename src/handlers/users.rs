//! # 사용자 HTTP 핸들러
//!
//! `/api/users` 아래의 회원가입/로그인, 프로필, 팔로우, 북마크 엔드포인트입니다.
//! 회원가입과 로그인을 제외한 모든 라우트는 Bearer 토큰이 필요합니다.
//!
//! 고정 경로(`details`, `blogs`, `savedblogs`)는 `{username}`보다 먼저 등록해야 합니다.

use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{FollowRequest, LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::domain::dto::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::ListQuery;
use crate::middlewares::AuthMiddleware;
use crate::services::users::{SaveAction, UserService};

/// 회원가입
///
/// # 엔드포인트
///
/// `POST /api/users/signup`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Alice", "username": "alice", "email": "alice@x.com", "password": "password123" }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "data": {
///     "user_id": "65a0...", "name": "Alice", "username": "alice", "email": "alice@x.com",
///     "profile": { "url": "", "public_id": "" }, "token": "eyJ...", "expiresIn": 86400
///   },
///   "status": 200
/// }
/// ```
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = users.signup(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 로그인 (`username` 필드에 사용자명 또는 이메일)
#[post("/login")]
pub async fn login(
    users: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = users.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 사용자 목록
///
/// `GET /api/users?page=1&per_page=10&sort=-createdAt`
#[get("", wrap = "AuthMiddleware::standard()")]
pub async fn list_users(
    users: web::Data<UserService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let list = users.list_users(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(list)))
}

#[get("/details", wrap = "AuthMiddleware::standard()")]
pub async fn details(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let details = users.details(&user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
}

/// 내가 작성한 블로그 목록 (페이지네이션)
#[get("/blogs", wrap = "AuthMiddleware::standard()")]
pub async fn my_blogs(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let blogs = users.my_blogs(&user.object_id()?, &query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(blogs)))
}

#[get("/savedblogs", wrap = "AuthMiddleware::standard()")]
pub async fn saved_blogs(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let blogs = users.saved_blogs(&user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(blogs)))
}

/// 공개 프로필 (블로그, 팔로워, 팔로잉 포함)
#[get("/{username}", wrap = "AuthMiddleware::standard()")]
pub async fn profile(
    users: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = users.profile(&username).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

/// 팔로우
///
/// # 요청 본문
///
/// ```json
/// { "target": "65a000000000000000000002" }
/// ```
#[put("/follow", wrap = "AuthMiddleware::standard()")]
pub async fn follow(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
    payload: web::Json<FollowRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    users.follow(&user.object_id()?, &payload.target).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

#[put("/unfollow", wrap = "AuthMiddleware::standard()")]
pub async fn unfollow(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
    payload: web::Json<FollowRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    users.unfollow(&user.object_id()?, &payload.target).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// 프로필 수정 (`{name?, image_url?}`)
#[put("/update", wrap = "AuthMiddleware::standard()")]
pub async fn update_profile(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    users.update_profile(&user.object_id()?, &payload).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// 북마크 추가/해제
///
/// `PUT /api/users/savedblogs/{slug}/{save|unsave}`
#[put("/savedblogs/{slug}/{type}", wrap = "AuthMiddleware::standard()")]
pub async fn toggle_saved(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (slug, action) = path.into_inner();
    let action: SaveAction = action.parse()?;

    users.toggle_saved(&user.object_id()?, &slug, action).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
