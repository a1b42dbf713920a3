//! # 인메모리 리포지토리
//!
//! MongoDB 없이 서비스와 HTTP 계층을 구동하기 위한 구현입니다.
//! 통합 테스트와 로컬 데모에서 사용하며, 유니크 제약과 정렬/페이지네이션을
//! MongoDB 구현과 같은 의미로 흉내 냅니다.

use std::cmp::Ordering;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::blogs::{Blog, Comment};
use crate::domain::entities::categories::{Category, Tag};
use crate::domain::entities::users::{CommentRequest, ImageRef, User};
use crate::domain::models::pagination::PageRequest;
use crate::repositories::blogs::{BlogFilter, BlogRepository, CommentRepository};
use crate::repositories::categories::{CategoryRepository, TagRepository};
use crate::repositories::users::{UserRepository, UserSet};

/// 잠금으로 보호되는 행 목록
struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl<T> Table<T> {
    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<T>>> {
        self.rows
            .read()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.rows
            .write()
            .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
    }
}

fn paginate<T>(mut rows: Vec<T>, page: &PageRequest, compare: fn(&T, &T, &str) -> Ordering) -> Vec<T> {
    // 내림차순이면 정렬 키가 같은 행은 나중에 들어온 것이 앞에 오도록 뒤집은 뒤 안정 정렬
    if page.sort.descending {
        rows.reverse();
    }
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, &page.sort.field);
        if page.sort.descending { ordering.reverse() } else { ordering }
    });

    rows.into_iter()
        .skip(usize::try_from(page.skip()).unwrap_or(usize::MAX))
        .take(page.limit() as usize)
        .collect()
}

fn compare_users(a: &User, b: &User, field: &str) -> Ordering {
    match field {
        "name" => a.name.cmp(&b.name),
        "username" => a.username.cmp(&b.username),
        "updatedAt" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    }
}

fn compare_blogs(a: &Blog, b: &Blog, field: &str) -> Ordering {
    match field {
        "title" => a.title.cmp(&b.title),
        "updatedAt" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Table<User>,
}

impl InMemoryUserRepository {
    fn update<F>(&self, id: &ObjectId, apply: F) -> AppResult<Option<User>>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write()?;
        Ok(users.iter_mut().find(|user| user.id.as_ref() == Some(id)).map(|user| {
            apply(user);
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }
}

fn user_set(user: &mut User, set: UserSet) -> &mut Vec<ObjectId> {
    match set {
        UserSet::Following => &mut user.following,
        UserSet::Followers => &mut user.followers,
        UserSet::SavedBlogs => &mut user.saved_blogs,
        UserSet::Blogs => &mut user.blogs,
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write()?;
        if users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(AppError::Conflict(
                "User with this username or email already exists".to_string(),
            ));
        }

        user.id.get_or_insert_with(ObjectId::new);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users.read()?.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read()?.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()?
            .iter()
            .find(|u| u.username == login || u.email == login)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.users.read()?.iter().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.users.read()?.iter().any(|u| u.email == email))
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .read()?
            .iter()
            .filter(|u| u.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read()?.len() as u64)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        let rows = self.users.read()?.clone();
        Ok(paginate(rows, page, compare_users))
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        name: Option<&str>,
        profile_url: Option<&str>,
    ) -> AppResult<Option<User>> {
        self.update(id, |user| {
            if let Some(name) = name {
                user.name = name.to_string();
            }
            if let Some(url) = profile_url {
                user.profile = ImageRef::from_url(url);
            }
        })
    }

    async fn add_to_set(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>> {
        self.update(id, |user| {
            let values = user_set(user, set);
            if !values.contains(&value) {
                values.push(value);
            }
        })
    }

    async fn pull(&self, id: &ObjectId, set: UserSet, value: ObjectId) -> AppResult<Option<User>> {
        self.update(id, |user| user_set(user, set).retain(|existing| *existing != value))
    }

    async fn push_comment_request(&self, id: &ObjectId, request: CommentRequest) -> AppResult<()> {
        self.update(id, |user| user.comment_requests.push(request))?;
        Ok(())
    }

    async fn pull_saved_blog_everywhere(&self, blog_id: &ObjectId) -> AppResult<u64> {
        let mut users = self.users.write()?;
        let mut modified = 0;
        for user in users.iter_mut().filter(|u| u.saved_blogs.contains(blog_id)) {
            user.saved_blogs.retain(|saved| saved != blog_id);
            modified += 1;
        }
        Ok(modified)
    }
}

#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: Table<Blog>,
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, mut blog: Blog) -> AppResult<Blog> {
        let mut blogs = self.blogs.write()?;
        if blogs.iter().any(|b| b.slug == blog.slug) {
            return Err(AppError::Conflict("Blog with this slug already exists".to_string()));
        }

        blog.id.get_or_insert_with(ObjectId::new);
        blogs.push(blog.clone());
        Ok(blog)
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Blog>> {
        Ok(self.blogs.read()?.iter().find(|b| b.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Blog>> {
        Ok(self.blogs.read()?.iter().find(|b| b.id.as_ref() == Some(id)).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.blogs.read()?.iter().any(|b| b.slug == slug))
    }

    async fn count(&self, filter: &BlogFilter) -> AppResult<u64> {
        Ok(self.blogs.read()?.iter().filter(|b| filter.matches(b)).count() as u64)
    }

    async fn list(&self, filter: &BlogFilter, page: &PageRequest) -> AppResult<Vec<Blog>> {
        let rows: Vec<Blog> = self
            .blogs
            .read()?
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        Ok(paginate(rows, page, compare_blogs))
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Blog>> {
        Ok(self
            .blogs
            .read()?
            .iter()
            .filter(|b| b.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let mut blogs = self.blogs.write()?;
        let before = blogs.len();
        blogs.retain(|b| b.id.as_ref() != Some(id));
        Ok(blogs.len() < before)
    }

    async fn push_comment(&self, blog_id: &ObjectId, comment_id: ObjectId) -> AppResult<()> {
        let mut blogs = self.blogs.write()?;
        if let Some(blog) = blogs.iter_mut().find(|b| b.id.as_ref() == Some(blog_id)) {
            blog.comments.push(comment_id);
            blog.updated_at = DateTime::now();
        }
        Ok(())
    }

    async fn toggle_featured(&self, slug: &str) -> AppResult<Option<Blog>> {
        let mut blogs = self.blogs.write()?;
        Ok(blogs.iter_mut().find(|b| b.slug == slug).map(|blog| {
            blog.featured = 1 - blog.featured;
            blog.updated_at = DateTime::now();
            blog.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Table<Comment>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, mut comment: Comment) -> AppResult<Comment> {
        comment.id.get_or_insert_with(ObjectId::new);
        self.comments.write()?.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Comment>> {
        Ok(self.comments.read()?.iter().find(|c| c.id.as_ref() == Some(id)).cloned())
    }

    async fn list_for_blog(&self, blog_id: &ObjectId, approved_only: bool) -> AppResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()?
            .iter()
            .filter(|c| &c.blog == blog_id && (!approved_only || c.approved))
            .cloned()
            .collect();

        // 같은 밀리초에 작성된 댓글은 나중에 들어온 것이 앞에 오도록 뒤집은 뒤 안정 정렬
        comments.reverse();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn delete_by_blog(&self, blog_id: &ObjectId) -> AppResult<u64> {
        let mut comments = self.comments.write()?;
        let before = comments.len();
        comments.retain(|c| &c.blog != blog_id);
        Ok((before - comments.len()) as u64)
    }

    async fn approve(&self, id: &ObjectId) -> AppResult<Option<Comment>> {
        let mut comments = self.comments.write()?;
        Ok(comments.iter_mut().find(|c| c.id.as_ref() == Some(id)).map(|comment| {
            comment.approved = true;
            comment.updated_at = DateTime::now();
            comment.clone()
        }))
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Table<Category>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, mut category: Category) -> AppResult<Category> {
        let mut categories = self.categories.write()?;
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(AppError::Conflict("Category already exists".to_string()));
        }

        category.id.get_or_insert_with(ObjectId::new);
        categories.push(category.clone());
        Ok(category)
    }

    async fn exists_by_title(&self, title: &str) -> AppResult<bool> {
        Ok(self.categories.read()?.iter().any(|c| c.title == title))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        Ok(self.categories.read()?.iter().find(|c| c.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Category>> {
        Ok(self.categories.read()?.iter().find(|c| c.id.as_ref() == Some(id)).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.categories.read()?.iter().any(|c| c.slug == slug))
    }

    async fn list_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.read()?.clone())
    }

    async fn find_many(&self, ids: &[ObjectId]) -> AppResult<Vec<Category>> {
        Ok(self
            .categories
            .read()?
            .iter()
            .filter(|c| c.id.is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: Table<Tag>,
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Tag>> {
        Ok(self.tags.read()?.iter().find(|t| t.title == title).cloned())
    }

    async fn insert(&self, mut tag: Tag) -> AppResult<Tag> {
        let mut tags = self.tags.write()?;
        if tags.iter().any(|t| t.slug == tag.slug) {
            return Err(AppError::Conflict("Tag already exists".to_string()));
        }

        tag.id.get_or_insert_with(ObjectId::new);
        tags.push(tag.clone());
        Ok(tag)
    }

    async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        Ok(self.tags.read()?.iter().any(|t| t.slug == slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::pagination::{ListQuery, USER_SORT_FIELDS};

    fn user(username: &str) -> User {
        User::new(
            username.to_uppercase(),
            username.to_string(),
            format!("{}@x.com", username),
            "hash".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_insert_enforces_unique_username_and_email() {
        let repo = InMemoryUserRepository::default();
        repo.insert(user("alice")).await.unwrap();

        let mut same_email = user("other");
        same_email.email = "alice@x.com".to_string();

        assert!(matches!(repo.insert(user("alice")).await, Err(AppError::Conflict(_))));
        assert!(matches!(repo.insert(same_email).await, Err(AppError::Conflict(_))));
    }

    #[actix_web::test]
    async fn test_add_to_set_is_idempotent_and_pull_is_lenient() {
        let repo = InMemoryUserRepository::default();
        let alice = repo.insert(user("alice")).await.unwrap();
        let id = alice.id.unwrap();
        let target = ObjectId::new();

        repo.add_to_set(&id, UserSet::Following, target).await.unwrap();
        let updated = repo.add_to_set(&id, UserSet::Following, target).await.unwrap().unwrap();
        assert_eq!(updated.following, vec![target]);

        let updated = repo.pull(&id, UserSet::Followers, target).await.unwrap().unwrap();
        assert!(updated.followers.is_empty());
    }

    #[actix_web::test]
    async fn test_list_sorts_by_requested_field() {
        let repo = InMemoryUserRepository::default();
        for name in ["charlie", "alice", "bob"] {
            repo.insert(user(name)).await.unwrap();
        }

        let query = ListQuery {
            sort: Some("username".to_string()),
            per_page: Some("2".to_string()),
            ..ListQuery::default()
        };
        let page = PageRequest::from_query(&query, USER_SORT_FIELDS).unwrap();
        let usernames: Vec<String> =
            repo.list(&page).await.unwrap().into_iter().map(|u| u.username).collect();

        assert_eq!(usernames, vec!["alice".to_string(), "bob".to_string()]);
    }

    #[actix_web::test]
    async fn test_toggle_featured_flips_between_zero_and_one() {
        let repo = InMemoryBlogRepository::default();
        repo.insert(Blog::new(
            "Hello".to_string(),
            "hello".to_string(),
            ObjectId::new(),
            "Body".to_string(),
            ImageRef::default(),
            ObjectId::new(),
            Vec::new(),
        ))
        .await
        .unwrap();

        assert_eq!(repo.toggle_featured("hello").await.unwrap().unwrap().featured, 1);
        assert_eq!(repo.toggle_featured("hello").await.unwrap().unwrap().featured, 0);
        assert!(repo.toggle_featured("missing").await.unwrap().is_none());
    }
}
