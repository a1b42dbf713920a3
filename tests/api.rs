//! HTTP 레벨 통합 테스트
//!
//! 인메모리 리포지토리 위에 실제 라우트/미들웨어 구성을 그대로 올려서 검증합니다.

use actix_web::http::StatusCode;
use actix_web::{middleware, test, web, App};
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};

use blogger_backend::core::AppState;
use blogger_backend::handlers::system::not_found;
use blogger_backend::repositories::Repositories;
use blogger_backend::routes::configure_all_routes;
use blogger_backend::services::auth::{PasswordService, TokenService};

const SECRET: &str = "api-test-secret";

macro_rules! app {
    ($repos:expr) => {{
        let state = AppState::new($repos, TokenService::new(SECRET, 24), PasswordService::new(4));
        test::init_service(
            App::new()
                .wrap(middleware::NormalizePath::trim())
                .configure(move |cfg: &mut web::ServiceConfig| state.configure(cfg))
                .configure(configure_all_routes)
                .default_service(web::to(not_found)),
        )
        .await
    }};
}

/// 요청을 보내고 `(상태 코드, JSON 본문)`을 돌려줍니다.
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// 회원가입 후 `(token, user_id)`
macro_rules! signup {
    ($app:expr, $username:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post().uri("/api/users/signup").set_json(json!({
                "name": "Tester",
                "username": $username,
                "email": format!("{}@x.com", $username),
                "password": "password123",
            }))
        );
        assert_eq!(status, StatusCode::OK, "{body}");
        (
            body["data"]["token"].as_str().unwrap().to_string(),
            body["data"]["user_id"].as_str().unwrap().to_string(),
        )
    }};
}

/// 관리자로 카테고리를 만들고 그 id를 돌려줍니다.
macro_rules! category {
    ($app:expr, $title:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post()
                .uri("/admin/category")
                .insert_header(bearer(&admin_token()))
                .set_json(json!({ "title": $title }))
        );
        assert_eq!(status, StatusCode::OK, "{body}");

        let (_, list) = call!($app, test::TestRequest::get().uri("/api/blogs/category-list"));
        list["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|category| category["title"] == $title)
            .map(|category| category["_id"].as_str().unwrap().to_string())
            .unwrap()
    }};
}

macro_rules! create_blog {
    ($app:expr, $token:expr, $category:expr, $title:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post()
                .uri("/api/blogs/create")
                .insert_header(bearer($token))
                .set_json(json!({
                    "title": $title,
                    "body": "Lorem ipsum",
                    "image_url": "https://cdn.example.com/cover.png",
                    "category": $category,
                    "tags": ["rust"],
                }))
        );
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body, json!({ "data": "Blog created", "status": 200 }));
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

fn admin_token() -> String {
    TokenService::new(SECRET, 1)
        .issue(&ObjectId::new().to_hex(), Some("admin"))
        .unwrap()
        .token
}

fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}

#[actix_web::test]
async fn test_root_and_api_info() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(app, test::TestRequest::get().uri("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "This is a bloggerr app api" }));

    // 끝의 슬래시는 정규화됩니다
    let (status, body) = call!(app, test::TestRequest::get().uri("/api/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Blogger API", "status": 200 }));
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(app, test::TestRequest::get().uri("/nope?x=1"));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": { "message": "Not found /nope?x=1" }, "status": 404 }));
}

#[actix_web::test]
async fn test_signup_then_login_resolves_same_user() {
    let app = app!(Repositories::in_memory());

    let (status, signup) = call!(
        app,
        test::TestRequest::post().uri("/api/users/signup").set_json(json!({
            "name": "Alice",
            "username": "alice",
            "email": "alice@x.com",
            "password": "password123",
        }))
    );
    assert_eq!(status, StatusCode::OK, "{signup}");
    assert_eq!(signup["data"]["username"], "alice");
    assert!(signup["data"]["password"].is_null());

    let (status, login) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "username": "alice@x.com", "password": "password123" }))
    );
    assert_eq!(status, StatusCode::OK, "{login}");
    assert_eq!(login["data"]["user_id"], signup["data"]["user_id"]);

    let token = login["data"]["token"].as_str().unwrap();
    let (status, details) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer(token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["data"]["username"], "alice");
    assert_eq!(details["data"]["email"], "alice@x.com");
    assert!(details["data"]["password"].is_null());
}

#[actix_web::test]
async fn test_login_failures() {
    let app = app!(Repositories::in_memory());
    signup!(app, "alice");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "username": "alice", "password": "wrong-password" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Password is incorrect.");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "username": "nobody", "password": "password123" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Email or username is invalid.");
}

#[actix_web::test]
async fn test_duplicate_username_is_rejected() {
    let app = app!(Repositories::in_memory());
    signup!(app, "alice");

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/users/signup").set_json(json!({
            "name": "Other",
            "username": "alice",
            "email": "other@x.com",
            "password": "password123",
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": { "message": "User with this username already exists" }, "status": 400 })
    );
}

#[actix_web::test]
async fn test_invalid_bodies_are_rejected() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/users/signup").set_json(json!({
            "name": "Alice",
            "username": "alice",
            "email": "alice@x.com",
            "password": "short",
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/signup")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{oops")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!error_message(&body).is_empty());
}

#[actix_web::test]
async fn test_protected_routes_require_valid_token() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/users/details"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "No token, Not authorized");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer("garbage"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "Token is invalid, Not authorized");

    let foreign = TokenService::new("another-secret", 1)
        .issue(&ObjectId::new().to_hex(), None)
        .unwrap()
        .token;
    let (status, _) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer(&foreign))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_routes_require_admin_role() {
    let app = app!(Repositories::in_memory());
    let (token, _) = signup!(app, "alice");

    let (status, body) = call!(app, test::TestRequest::get().uri("/admin").insert_header(bearer(&token)));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "User is not an Admin!");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/admin").insert_header(bearer(&admin_token()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Admin Route", "status": 200 }));
}

#[actix_web::test]
async fn test_admin_category_create_and_duplicate() {
    let app = app!(Repositories::in_memory());
    let admin = admin_token();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/admin/category")
            .insert_header(bearer(&admin))
            .set_json(json!({ "title": "Rust Lang" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": { "title": "Rust Lang", "slug": "rust-lang" }, "status": 200 }));

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/admin/category")
            .insert_header(bearer(&admin))
            .set_json(json!({ "title": "Rust Lang" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Category already exists");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/admin/category").insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_empty_blog_list_is_ok() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [], "status": 200 }));
}

#[actix_web::test]
async fn test_blog_list_page_bounds() {
    let app = app!(Repositories::in_memory());
    let (token, _) = signup!(app, "alice");
    let category = category!(app, "Tech");
    create_blog!(app, &token, &category, "Hello World");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs?page=1"));
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "hello-world");
    assert_eq!(items[0]["user"]["username"], "alice");
    assert_eq!(items[0]["category"]["slug"], "tech");

    for page in ["0", "2"] {
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri(&format!("/api/blogs?page={}", page))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "Page number is out of bounds");
    }

    // 숫자가 아니면 기본값 1
    let (status, _) = call!(app, test::TestRequest::get().uri("/api/blogs?page=abc"));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_blog_list_filters_by_category() {
    let app = app!(Repositories::in_memory());
    let (token, _) = signup!(app, "alice");
    let tech = category!(app, "Tech");
    let food = category!(app, "Food");
    create_blog!(app, &token, &tech, "Borrow Checker");
    create_blog!(app, &token, &food, "Kimchi Stew");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs?category=food"));
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "kimchi-stew");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs?category=all"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs?category=missing"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "No category found");
}

#[actix_web::test]
async fn test_create_blog_requires_all_fields() {
    let app = app!(Repositories::in_memory());
    let (token, _) = signup!(app, "alice");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blogs/create")
            .insert_header(bearer(&token))
            .set_json(json!({ "title": "Only a title" }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "All fields are required");
}

#[actix_web::test]
async fn test_follow_is_idempotent() {
    let app = app!(Repositories::in_memory());
    let (alice, alice_id) = signup!(app, "alice");
    let (bob, bob_id) = signup!(app, "bob");
    let (_, carol_id) = signup!(app, "carol");

    for _ in 0..2 {
        let (status, body) = call!(
            app,
            test::TestRequest::put()
                .uri("/api/users/follow")
                .insert_header(bearer(&alice))
                .set_json(json!({ "target": bob_id }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": 200 }));
    }

    let (_, details) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer(&alice))
    );
    assert_eq!(details["data"]["following"], json!([bob_id]));

    let (_, details) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer(&bob))
    );
    assert_eq!(details["data"]["followers"], json!([alice_id]));

    // 팔로우하지 않은 대상의 언팔로우도 성공
    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/unfollow")
            .insert_header(bearer(&alice))
            .set_json(json!({ "target": carol_id }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/follow")
            .insert_header(bearer(&alice))
            .set_json(json!({ "target": alice_id }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Target and user are same");
}

#[actix_web::test]
async fn test_public_profile_by_username() {
    let app = app!(Repositories::in_memory());
    let (alice, _) = signup!(app, "alice");
    let category = category!(app, "Tech");
    create_blog!(app, &alice, &category, "First Post");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/users/alice").insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["blogs"][0]["slug"], "first-post");
    assert!(body["data"]["password"].is_null());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/users/ghost").insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "User with this username was not found");
}

#[actix_web::test]
async fn test_comment_visible_to_readers_after_approval() {
    let app = app!(Repositories::in_memory());
    let (owner, _) = signup!(app, "alice");
    let (reader, _) = signup!(app, "bob");
    let category = category!(app, "Tech");
    create_blog!(app, &owner, &category, "Hello World");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/blogs/comments/hello-world")
            .insert_header(bearer(&reader))
            .set_json(json!({ "body": "Nice post" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": 200 }));

    let (_, body) = call!(
        app,
        test::TestRequest::get().uri("/api/blogs/comments/hello-world").insert_header(bearer(&reader))
    );
    assert_eq!(body["data"], json!([]));

    let (_, body) = call!(
        app,
        test::TestRequest::get().uri("/api/blogs/comments/hello-world").insert_header(bearer(&owner))
    );
    let comments = body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["approved"], false);
    assert_eq!(comments[0]["user"]["username"], "bob");
    let comment_id = comments[0]["_id"].as_str().unwrap().to_string();

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/blogs/comments/approve/{}", comment_id))
            .insert_header(bearer(&reader))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Blog does not belongs to the current user");

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/blogs/comments/approve/{}", comment_id))
            .insert_header(bearer(&owner))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call!(
        app,
        test::TestRequest::get().uri("/api/blogs/comments/hello-world").insert_header(bearer(&reader))
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["body"], "Nice post");
}

#[actix_web::test]
async fn test_delete_blog_cascades() {
    let repos = Repositories::in_memory();
    let app = app!(repos.clone());
    let (owner, _) = signup!(app, "alice");
    let (reader, _) = signup!(app, "bob");
    let category = category!(app, "Tech");
    create_blog!(app, &owner, &category, "Hello World");

    let (_, blog) = call!(app, test::TestRequest::get().uri("/api/blogs/hello-world"));
    let blog_id = ObjectId::parse_str(blog["data"]["_id"].as_str().unwrap()).unwrap();

    call!(
        app,
        test::TestRequest::post()
            .uri("/api/blogs/comments/hello-world")
            .insert_header(bearer(&reader))
            .set_json(json!({ "body": "First!" }))
    );
    call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/savedblogs/hello-world/save")
            .insert_header(bearer(&reader))
    );

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri("/api/blogs/hello-world").insert_header(bearer(&reader))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "You are not authorized");

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri("/api/blogs/hello-world").insert_header(bearer(&owner))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": 200 }));

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/blogs/hello-world"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "No Blog Found");

    assert!(repos.comments.list_for_blog(&blog_id, false).await.unwrap().is_empty());

    let (_, details) = call!(
        app,
        test::TestRequest::get().uri("/api/users/details").insert_header(bearer(&owner))
    );
    assert_eq!(details["data"]["blogs"], json!([]));

    let (_, saved) = call!(
        app,
        test::TestRequest::get().uri("/api/users/savedblogs").insert_header(bearer(&reader))
    );
    assert_eq!(saved["data"], json!([]));
}

#[actix_web::test]
async fn test_save_and_unsave_blog() {
    let app = app!(Repositories::in_memory());
    let (owner, _) = signup!(app, "alice");
    let (reader, _) = signup!(app, "bob");
    let category = category!(app, "Tech");
    create_blog!(app, &owner, &category, "Hello World");

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/savedblogs/hello-world/save")
            .insert_header(bearer(&reader))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, saved) = call!(
        app,
        test::TestRequest::get().uri("/api/users/savedblogs").insert_header(bearer(&reader))
    );
    assert_eq!(saved["data"].as_array().unwrap().len(), 1);
    assert_eq!(saved["data"][0]["slug"], "hello-world");

    let (status, body) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/savedblogs/hello-world/bookmark")
            .insert_header(bearer(&reader))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid type, expected save or unsave");

    let (status, _) = call!(
        app,
        test::TestRequest::put()
            .uri("/api/users/savedblogs/hello-world/unsave")
            .insert_header(bearer(&reader))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, saved) = call!(
        app,
        test::TestRequest::get().uri("/api/users/savedblogs").insert_header(bearer(&reader))
    );
    assert_eq!(saved["data"], json!([]));
}

#[actix_web::test]
async fn test_featured_toggle_flips() {
    let app = app!(Repositories::in_memory());
    let (owner, _) = signup!(app, "alice");
    let category = category!(app, "Tech");
    create_blog!(app, &owner, &category, "Hello World");
    let admin = admin_token();

    let (status, body) = call!(
        app,
        test::TestRequest::put().uri("/admin/blogs/feature/hello-world").insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Success added to featured", "status": 200 }));

    let (_, blog) = call!(app, test::TestRequest::get().uri("/api/blogs/hello-world"));
    assert_eq!(blog["data"]["featured"], 1);

    let (_, body) = call!(
        app,
        test::TestRequest::put().uri("/admin/blogs/feature/hello-world").insert_header(bearer(&admin))
    );
    assert_eq!(body["message"], "Success removed from featured");

    let (_, blog) = call!(app, test::TestRequest::get().uri("/api/blogs/hello-world"));
    assert_eq!(blog["data"]["featured"], 0);

    let (status, body) = call!(
        app,
        test::TestRequest::put().uri("/admin/blogs/feature/missing").insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "No Blog Found");
}

#[actix_web::test]
async fn test_huge_page_on_empty_blog_list() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/blogs?page=9223372036854775807&per_page=10")
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [], "status": 200 }));
}

#[actix_web::test]
async fn test_user_list_hides_passwords_and_checks_bounds() {
    let app = app!(Repositories::in_memory());
    let (token, _) = signup!(app, "alice");
    signup!(app, "bob");
    signup!(app, "carol");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/users").insert_header(bearer(&token)));
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["username"], "carol");
    assert_eq!(users[2]["username"], "alice");
    assert!(users.iter().all(|user| user.get("password").is_none() && user.get("password_hash").is_none()));

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/users?page=2&per_page=2").insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    for page in ["0", "2"] {
        let (status, body) = call!(
            app,
            test::TestRequest::get()
                .uri(&format!("/api/users?page={}", page))
                .insert_header(bearer(&token))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "Page number is out of bounds");
    }

    let (status, _) = call!(app, test::TestRequest::get().uri("/api/users"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_own_blog_list_is_filtered_by_owner() {
    let app = app!(Repositories::in_memory());
    let (alice, alice_id) = signup!(app, "alice");
    let (bob, _) = signup!(app, "bob");
    let (carol, _) = signup!(app, "carol");
    let category = category!(app, "Tech");
    create_blog!(app, &alice, &category, "First Post");
    create_blog!(app, &bob, &category, "Bob Post");
    create_blog!(app, &alice, &category, "Second Post");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/users/blogs").insert_header(bearer(&alice)));
    assert_eq!(status, StatusCode::OK);
    let blogs = body["data"].as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0]["slug"], "second-post");
    assert_eq!(blogs[1]["slug"], "first-post");
    assert!(blogs.iter().all(|blog| blog["user"] == alice_id.as_str()));

    for page in ["0", "2"] {
        let (status, body) = call!(
            app,
            test::TestRequest::get()
                .uri(&format!("/api/users/blogs?page={}", page))
                .insert_header(bearer(&alice))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "Page number is out of bounds");
    }

    let (status, body) = call!(
        app,
        test::TestRequest::get()
            .uri("/api/users/blogs?page=9223372036854775807")
            .insert_header(bearer(&carol))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_blank_category_title_is_rejected() {
    let app = app!(Repositories::in_memory());

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/admin/category")
            .insert_header(bearer(&admin_token()))
            .set_json(json!({ "title": "   " }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "title is required");
}
