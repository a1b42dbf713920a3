//! # 사용자 관리 서비스 구현
//!
//! 회원가입/로그인, 사용자 목록과 프로필 조회, 팔로우, 북마크(saved blogs)를 담당합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Auth             │  Query              │  Relations     │
//! │  • signup         │  • list_users       │  • follow      │
//! │  • login          │  • details          │  • unfollow    │
//! │                   │  • profile          │  • saved_blogs │
//! │                   │  • my_blogs         │  • toggle_saved│
//! │                   │  • update_profile   │                │
//! └──────────────────────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//!   PasswordService /     Repositories (users, blogs,
//!   TokenService          categories)
//! ```
//!
//! 관계 변경(팔로우, 북마크)은 모두 `$addToSet` / `$pull` 한 번으로 처리되므로
//! 같은 요청을 반복해도 결과가 같습니다.

use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::blogs::{BlogListItem, BlogResponse};
use crate::domain::dto::users::{
    AuthResponse, LoginRequest, SignupRequest, UpdateProfileRequest, UserProfileResponse,
    UserResponse, UserSummary,
};
use crate::domain::entities::blogs::Blog;
use crate::domain::entities::users::User;
use crate::domain::models::pagination::{ListQuery, PageRequest, BLOG_SORT_FIELDS, USER_SORT_FIELDS};
use crate::domain::models::token::IssuedToken;
use crate::repositories::blogs::BlogFilter;
use crate::repositories::users::UserSet;
use crate::repositories::Repositories;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::blogs::populate_list_items;

/// 북마크 변경 종류 (`/savedblogs/{slug}/{type}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Save,
    Unsave,
}

impl FromStr for SaveAction {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "save" => Ok(Self::Save),
            "unsave" => Ok(Self::Unsave),
            _ => Err(AppError::ValidationError(
                "Invalid type, expected save or unsave".to_string(),
            )),
        }
    }
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 보안 서비스는 생성 시 주입되며, 요청 사이에 상태를 갖지 않습니다.
///
/// ## 에러 처리 전략
///
/// - **Conflict**: 사용자명/이메일 중복
/// - **InvalidCredentials**: 로그인 실패
/// - **InvalidOperation**: 자기 자신 팔로우
/// - **NotFound**: 사용자/블로그 없음
/// - **OutOfRange**: 페이지 범위 초과
#[derive(Clone)]
pub struct UserService {
    repos: Repositories,
    tokens: TokenService,
    passwords: PasswordService,
}

impl UserService {
    pub fn new(repos: Repositories, tokens: TokenService, passwords: PasswordService) -> Self {
        Self {
            repos,
            tokens,
            passwords,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// 입력값 검증은 핸들러에서 끝난 상태로 들어옵니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 사용자명, 이메일 순서로 중복 확인
    /// 2. 비밀번호 해싱 후 저장 (동시 가입 경합은 유니크 인덱스가 막습니다)
    /// 3. 기본 역할(`user`)로 토큰 발급
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::Conflict)` - `User with this username already exists` /
    ///   `User with this email already exists`
    pub async fn signup(&self, request: SignupRequest) -> AppResult<AuthResponse> {
        let start_time = std::time::Instant::now();

        if self.repos.users.exists_by_username(&request.username).await? {
            return Err(AppError::Conflict(
                "User with this username already exists".to_string(),
            ));
        }
        if self.repos.users.exists_by_email(&request.email).await? {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = self.passwords.hash(&request.password)?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name, request.username, request.email, password_hash);
        let created = self.repos.users.insert(user).await?;
        let issued = self.issue_for(&created)?;

        info!(
            "👤 회원가입 완료: {} ({:?})",
            created.username,
            start_time.elapsed()
        );
        Ok(AuthResponse::new(created, issued))
    }

    /// 사용자명 또는 이메일 + 비밀번호 로그인
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = match self.repos.users.find_by_login(&request.username).await? {
            Some(user) => user,
            None => {
                warn!("로그인 실패 (알 수 없는 사용자): {}", request.username);
                return Err(AppError::InvalidCredentials(
                    "Email or username is invalid.".to_string(),
                ));
            }
        };

        if !self.passwords.verify(&request.password, &user.password_hash)? {
            warn!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::InvalidCredentials("Password is incorrect.".to_string()));
        }

        let issued = self.issue_for(&user)?;
        info!("🔑 로그인 성공: {}", user.username);
        Ok(AuthResponse::new(user, issued))
    }

    fn issue_for(&self, user: &User) -> AppResult<IssuedToken> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 _id가 없습니다".to_string()))?;

        Ok(self.tokens.issue(&user_id, Some(user.role.as_str()))?)
    }

    /// 전체 사용자 목록 (페이지네이션)
    pub async fn list_users(&self, query: &ListQuery) -> AppResult<Vec<UserResponse>> {
        let page = PageRequest::from_query(query, USER_SORT_FIELDS)?;
        let total = self.repos.users.count().await?;
        page.ensure_in_bounds(total)?;
        if total == 0 {
            return Ok(Vec::new());
        }

        let users = self.repos.users.list(&page).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 토큰 주체의 상세 정보 (비밀번호 제외)
    pub async fn details(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        self.find_user(user_id).await.map(UserResponse::from)
    }

    /// 사용자명으로 공개 프로필 조회
    ///
    /// 블로그는 최신순으로, 팔로워/팔로잉은 `username profile name` 요약으로 채웁니다.
    pub async fn profile(&self, username: &str) -> AppResult<UserProfileResponse> {
        let user = self
            .repos
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User with this username was not found".to_string())
            })?;

        let mut blogs = self.repos.blogs.find_many(&user.blogs).await?;
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let blogs = blogs.into_iter().map(BlogResponse::from).collect();

        let following = self.summaries(&user.following).await?;
        let followers = self.summaries(&user.followers).await?;

        Ok(UserProfileResponse::new(user, blogs, following, followers))
    }

    /// 저장된 순서를 유지하며 사용자 요약 목록을 만듭니다. 사라진 사용자는 건너뜁니다.
    async fn summaries(&self, ids: &[ObjectId]) -> AppResult<Vec<UserSummary>> {
        let found: HashMap<ObjectId, User> = self
            .repos
            .users
            .find_many(ids)
            .await?
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| found.get(id))
            .map(UserSummary::from)
            .collect())
    }

    /// 내가 작성한 블로그 목록 (페이지네이션)
    pub async fn my_blogs(&self, user_id: &ObjectId, query: &ListQuery) -> AppResult<Vec<BlogResponse>> {
        let page = PageRequest::from_query(query, BLOG_SORT_FIELDS)?;
        let filter = BlogFilter::owned_by(*user_id);
        let total = self.repos.blogs.count(&filter).await?;
        page.ensure_in_bounds(total)?;
        if total == 0 {
            return Ok(Vec::new());
        }

        let blogs = self.repos.blogs.list(&filter, &page).await?;
        Ok(blogs.into_iter().map(BlogResponse::from).collect())
    }

    /// `target`을 팔로우합니다. 이미 팔로우 중이면 아무것도 바뀌지 않습니다.
    pub async fn follow(&self, actor: &ObjectId, target: &str) -> AppResult<()> {
        let target = self.resolve_target(actor, target).await?;

        self.repos
            .users
            .add_to_set(actor, UserSet::Following, target)
            .await?
            .ok_or_else(user_not_found)?;
        self.repos
            .users
            .add_to_set(&target, UserSet::Followers, *actor)
            .await?;

        info!("👥 팔로우: {} → {}", actor, target);
        Ok(())
    }

    /// 팔로우를 해제합니다. 팔로우 관계가 없어도 에러가 아닙니다.
    pub async fn unfollow(&self, actor: &ObjectId, target: &str) -> AppResult<()> {
        let target = self.resolve_target(actor, target).await?;

        self.repos
            .users
            .pull(actor, UserSet::Following, target)
            .await?
            .ok_or_else(user_not_found)?;
        self.repos
            .users
            .pull(&target, UserSet::Followers, *actor)
            .await?;

        info!("👥 언팔로우: {} → {}", actor, target);
        Ok(())
    }

    async fn resolve_target(&self, actor: &ObjectId, target: &str) -> AppResult<ObjectId> {
        let target = target.trim();
        if target == actor.to_hex() {
            return Err(AppError::InvalidOperation("Target and user are same".to_string()));
        }

        let target_id = ObjectId::parse_str(target)
            .map_err(|_| AppError::ValidationError(format!("Invalid target id '{}'", target)))?;

        if self.repos.users.find_by_id(&target_id).await?.is_none() {
            return Err(user_not_found());
        }
        Ok(target_id)
    }

    /// 이름/프로필 이미지 부분 수정. 비어 있는 필드는 기존 값을 유지합니다.
    pub async fn update_profile(
        &self,
        user_id: &ObjectId,
        request: &UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        let updated = self
            .repos
            .users
            .update_profile(user_id, request.name(), request.image_url())
            .await?
            .ok_or_else(user_not_found)?;

        info!("✏️ 프로필 수정: {}", updated.username);
        Ok(UserResponse::from(updated))
    }

    /// 북마크한 블로그 목록 (작성자/카테고리 포함)
    pub async fn saved_blogs(&self, user_id: &ObjectId) -> AppResult<Vec<BlogListItem>> {
        let user = self.find_user(user_id).await?;

        let mut found: HashMap<ObjectId, Blog> = self
            .repos
            .blogs
            .find_many(&user.saved_blogs)
            .await?
            .into_iter()
            .filter_map(|blog| blog.id.map(|id| (id, blog)))
            .collect();
        let blogs = user
            .saved_blogs
            .iter()
            .filter_map(|id| found.remove(id))
            .collect();

        populate_list_items(&self.repos, blogs).await
    }

    /// slug로 블로그를 북마크하거나 해제합니다.
    pub async fn toggle_saved(&self, user_id: &ObjectId, slug: &str, action: SaveAction) -> AppResult<()> {
        let blog_id = self
            .repos
            .blogs
            .find_by_slug(slug)
            .await?
            .and_then(|blog| blog.id)
            .ok_or_else(|| AppError::NotFound("No Blog Found".to_string()))?;

        let updated = match action {
            SaveAction::Save => self.repos.users.add_to_set(user_id, UserSet::SavedBlogs, blog_id).await?,
            SaveAction::Unsave => self.repos.users.pull(user_id, UserSet::SavedBlogs, blog_id).await?,
        };
        updated.ok_or_else(user_not_found)?;

        debug!("북마크 변경 ({:?}): {} / {}", action, user_id, slug);
        Ok(())
    }

    async fn find_user(&self, user_id: &ObjectId) -> AppResult<User> {
        self.repos
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::ImageRef;

    fn service() -> UserService {
        UserService::new(
            Repositories::in_memory(),
            TokenService::new("user-service-test-secret", 24),
            PasswordService::new(4),
        )
    }

    fn signup_request(username: &str, email: &str) -> SignupRequest {
        SignupRequest {
            name: "Alice".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    async fn signed_up(service: &UserService, username: &str) -> ObjectId {
        let response = service
            .signup(signup_request(username, &format!("{}@x.com", username)))
            .await
            .unwrap();
        ObjectId::parse_str(&response.user_id).unwrap()
    }

    #[test]
    fn test_save_action_parse() {
        assert_eq!("save".parse::<SaveAction>().unwrap(), SaveAction::Save);
        assert_eq!("unsave".parse::<SaveAction>().unwrap(), SaveAction::Unsave);
        assert!(matches!("bookmark".parse::<SaveAction>(), Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_signup_then_login_resolves_same_user() {
        let service = service();
        let signup = service.signup(signup_request("alice", "alice@x.com")).await.unwrap();

        let login = service
            .login(LoginRequest { username: "alice@x.com".to_string(), password: "password123".to_string() })
            .await
            .unwrap();

        assert_eq!(signup.user_id, login.user_id);
        let claims = service.tokens.verify(&login.token).unwrap();
        assert_eq!(claims.user_id, signup.user_id);
        assert_eq!(claims.role.as_deref(), Some("user"));
    }

    #[actix_web::test]
    async fn test_signup_conflicts() {
        let service = service();
        service.signup(signup_request("alice", "alice@x.com")).await.unwrap();

        let err = service.signup(signup_request("alice", "other@x.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "User with this username already exists");

        let err = service.signup(signup_request("alicia", "alice@x.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let service = service();
        service.signup(signup_request("alice", "alice@x.com")).await.unwrap();

        let err = service
            .login(LoginRequest { username: "bob".to_string(), password: "password123".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email or username is invalid.");

        let err = service
            .login(LoginRequest { username: "alice".to_string(), password: "password999".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials(ref m) if m == "Password is incorrect."));
    }

    #[actix_web::test]
    async fn test_follow_is_idempotent_and_unfollow_is_lenient() {
        let service = service();
        let alice = signed_up(&service, "alice").await;
        let bob = signed_up(&service, "bob").await;

        service.unfollow(&alice, &bob.to_hex()).await.unwrap();
        service.follow(&alice, &bob.to_hex()).await.unwrap();
        service.follow(&alice, &bob.to_hex()).await.unwrap();

        let alice_user = service.find_user(&alice).await.unwrap();
        let bob_user = service.find_user(&bob).await.unwrap();
        assert_eq!(alice_user.following, vec![bob]);
        assert_eq!(bob_user.followers, vec![alice]);

        service.unfollow(&alice, &bob.to_hex()).await.unwrap();
        assert!(service.find_user(&alice).await.unwrap().following.is_empty());
        assert!(service.find_user(&bob).await.unwrap().followers.is_empty());
    }

    #[actix_web::test]
    async fn test_follow_rejections() {
        let service = service();
        let alice = signed_up(&service, "alice").await;

        let err = service.follow(&alice, &alice.to_hex()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidOperation(_)));

        let err = service.follow(&alice, "not-an-id").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = service.follow(&alice, &ObjectId::new().to_hex()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_update_profile_keeps_blank_fields() {
        let service = service();
        let alice = signed_up(&service, "alice").await;

        let request = UpdateProfileRequest { name: Some("  ".to_string()), image_url: Some("https://img/a.png".to_string()) };
        let updated = service.update_profile(&alice, &request).await.unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.profile, ImageRef::from_url("https://img/a.png"));
    }

    #[actix_web::test]
    async fn test_toggle_saved() {
        let service = service();
        let alice = signed_up(&service, "alice").await;
        let blog = service
            .repos
            .blogs
            .insert(Blog::new(
                "Hello".to_string(),
                "hello".to_string(),
                alice,
                "body".to_string(),
                ImageRef::from_url("https://img/c.png"),
                ObjectId::new(),
                Vec::new(),
            ))
            .await
            .unwrap();

        service.toggle_saved(&alice, "hello", SaveAction::Save).await.unwrap();
        service.toggle_saved(&alice, "hello", SaveAction::Save).await.unwrap();
        let saved = service.saved_blogs(&alice).await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, blog.id.unwrap().to_hex());

        service.toggle_saved(&alice, "hello", SaveAction::Unsave).await.unwrap();
        assert!(service.saved_blogs(&alice).await.unwrap().is_empty());

        let err = service.toggle_saved(&alice, "missing", SaveAction::Save).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "No Blog Found"));
    }

    #[actix_web::test]
    async fn test_details_for_vanished_user() {
        let err = service().details(&ObjectId::new()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "User not found"));
    }

    fn user_at(username: &str, millis: i64) -> User {
        let mut user = User::new(
            username.to_uppercase(),
            username.to_string(),
            format!("{}@x.com", username),
            "$2b$04$hash".to_string(),
        );
        user.created_at = mongodb::bson::DateTime::from_millis(millis);
        user
    }

    fn list_query(page: Option<&str>, per_page: Option<&str>, sort: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
            sort: sort.map(str::to_string),
            category: None,
        }
    }

    #[actix_web::test]
    async fn test_list_users_sorts_newest_first_and_checks_bounds() {
        let service = service();
        for (username, millis) in [("ann", 1_000), ("ben", 3_000), ("cid", 2_000)] {
            service.repos.users.insert(user_at(username, millis)).await.unwrap();
        }

        let usernames = |users: Vec<UserResponse>| users.into_iter().map(|u| u.username).collect::<Vec<_>>();

        let all = service.list_users(&ListQuery::default()).await.unwrap();
        let json = serde_json::to_value(&all).unwrap();
        assert!(json.as_array().unwrap().iter().all(|user| user.get("password").is_none()
            && user.get("password_hash").is_none()));
        assert_eq!(usernames(all), vec!["ben", "cid", "ann"]);

        let second_page = service.list_users(&list_query(Some("2"), Some("2"), None)).await.unwrap();
        assert_eq!(usernames(second_page), vec!["ann"]);

        let by_name = service.list_users(&list_query(None, None, Some("username"))).await.unwrap();
        assert_eq!(usernames(by_name), vec!["ann", "ben", "cid"]);

        for (page, per_page) in [("0", "2"), ("3", "2"), ("2", "10")] {
            assert!(matches!(
                service.list_users(&list_query(Some(page), Some(per_page), None)).await,
                Err(AppError::OutOfRange(ref m)) if m == "Page number is out of bounds"
            ));
        }
        assert!(matches!(
            service.list_users(&list_query(None, None, Some("password"))).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_my_blogs_lists_only_own_blogs() {
        let service = service();
        let alice = signed_up(&service, "alice").await;
        let bob = signed_up(&service, "bob").await;
        let category = ObjectId::new();

        for (title, owner, millis) in [("old", alice, 1_000), ("theirs", bob, 2_000), ("new", alice, 3_000)] {
            let mut blog = Blog::new(
                title.to_string(),
                title.to_string(),
                owner,
                "body".to_string(),
                ImageRef::default(),
                category,
                Vec::new(),
            );
            blog.created_at = mongodb::bson::DateTime::from_millis(millis);
            service.repos.blogs.insert(blog).await.unwrap();
        }

        let mine = service.my_blogs(&alice, &ListQuery::default()).await.unwrap();
        let titles: Vec<_> = mine.iter().map(|blog| blog.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
        assert!(mine.iter().all(|blog| blog.user == alice.to_hex()));

        for page in ["0", "2"] {
            assert!(matches!(
                service.my_blogs(&alice, &list_query(Some(page), None, None)).await,
                Err(AppError::OutOfRange(_))
            ));
        }

        let carol = signed_up(&service, "carol").await;
        let huge = list_query(Some(&i64::MAX.to_string()), Some("10"), None);
        assert!(service.my_blogs(&carol, &huge).await.unwrap().is_empty());
    }
}
