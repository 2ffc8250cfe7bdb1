mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use common::{create_test_user, generate_unique_email, setup_test_app, test_jwt_config};
use learntrack::modules::users::model::Role;
use learntrack::utils::jwt::verify_token;

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn count_users_with_email(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let (status, body) = post_json(
        app,
        "/auth/register",
        json!({ "email": email, "password": "secret123", "name": "Ada" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["name"], "Ada");
    assert_eq!(body["user"]["role"], "USER");
    assert!(body["user"]["passwordHash"].is_null());
    assert!(body["user"].get("password_hash").is_none());

    // The issued token's subject is the created user's id.
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_without_name(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let (status, body) = post_json(
        app,
        "/auth/register",
        json!({ "email": email, "password": "secret123" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["user"]["name"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "firstpass", Role::User).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = post_json(
        app,
        "/auth/register",
        json!({ "email": email, "password": "secondpass" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already in use");
    assert_eq!(count_users_with_email(&pool, &email).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_invalid_email_format(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, _) = post_json(
        app,
        "/auth/register",
        json!({ "email": "not-an-email", "password": "secret123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let (status, _) = post_json(
        app,
        "/auth/register",
        json!({ "email": email, "password": "short" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count_users_with_email(&pool, &email).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_missing_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, _) = post_json(
        app,
        "/auth/register",
        json!({ "email": generate_unique_email() }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "testpass123", Role::User).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = post_json(
        app,
        "/auth/login",
        json!({ "email": email, "password": "testpass123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["email"], email);

    let claims = verify_token(body["token"].as_str().unwrap(), &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email_and_wrong_password_look_identical(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "correctpass", Role::User).await;

    let app = setup_test_app(pool.clone());

    let (unknown_status, unknown_body) = post_json(
        app.clone(),
        "/auth/login",
        json!({ "email": generate_unique_email(), "password": "whatever1" }),
    )
    .await;
    let (wrong_status, wrong_body) = post_json(
        app,
        "/auth/login",
        json!({ "email": email, "password": "wrongpassword" }),
    )
    .await;

    // No account-enumeration signal: same status, same body.
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_passwordless_account_rejected(pool: PgPool) {
    // Externally provisioned account: NULL password_hash.
    let email = generate_unique_email();
    sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, NULL)")
        .bind(&email)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let (status, body) = post_json(
        app,
        "/auth/login",
        json!({ "email": email, "password": "anything1" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_email_format(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, _) = post_json(
        app,
        "/auth/login",
        json!({ "email": "not-an-email", "password": "password123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login_round_trip(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let (status, register_body) = post_json(
        app.clone(),
        "/auth/register",
        json!({ "email": email, "password": "roundtrip1" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, login_body) = post_json(
        app,
        "/auth/login",
        json!({ "email": email, "password": "roundtrip1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let claims = verify_token(login_body["token"].as_str().unwrap(), &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, register_body["user"]["id"].as_str().unwrap());
}
