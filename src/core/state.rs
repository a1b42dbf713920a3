//! 애플리케이션 상태 조립
//!
//! 시작 시 한 번 만든 서비스들을 `web::Data`로 등록하고,
//! JSON 본문/쿼리/경로 추출 실패를 공통 에러 봉투(`ValidationError`)로 바꿉니다.

use actix_web::web;
use log::debug;

use crate::core::errors::AppError;
use crate::repositories::Repositories;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::blogs::{BlogService, CommentService};
use crate::services::categories::CategoryService;
use crate::services::users::UserService;

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub blogs: BlogService,
    pub comments: CommentService,
    pub categories: CategoryService,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(repos: Repositories, tokens: TokenService, passwords: PasswordService) -> Self {
        Self {
            users: UserService::new(repos.clone(), tokens.clone(), passwords),
            blogs: BlogService::new(repos.clone()),
            comments: CommentService::new(repos.clone()),
            categories: CategoryService::new(repos),
            tokens,
        }
    }

    /// `App::configure`에 넘겨 서비스와 추출기 설정을 등록합니다.
    ///
    /// ```rust,ignore
    /// App::new()
    ///     .configure(|cfg| state.configure(cfg))
    ///     .configure(configure_all_routes)
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.blogs.clone()))
            .app_data(web::Data::new(self.comments.clone()))
            .app_data(web::Data::new(self.categories.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, req| {
                debug!("JSON 본문 파싱 실패 {}: {}", req.path(), err);
                AppError::ValidationError(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, req| {
                debug!("쿼리 파싱 실패 {}: {}", req.path(), err);
                AppError::ValidationError(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, req| {
                debug!("경로 파싱 실패 {}: {}", req.path(), err);
                AppError::ValidationError(err.to_string()).into()
            }));
    }
}
