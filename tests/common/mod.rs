use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use learntrack::config::jwt::JwtConfig;
use learntrack::graphql::create_schema;
use learntrack::modules::users::model::Role;
use learntrack::router::init_router;
use learntrack::state::AppState;
use learntrack::utils::jwt::create_access_token;
use learntrack::utils::password::hash_password;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        schema: Arc::new(create_schema()),
    }
}

#[allow(dead_code)]
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool))
}

#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: Role) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password_hash, name, role) VALUES ($1, $2, $3, $4) \
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind("Test User")
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn token_for(user: &TestUser) -> String {
    create_access_token(user.id, user.role, &test_jwt_config()).unwrap()
}
