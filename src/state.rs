use std::sync::Arc;

use sqlx::PgPool;

use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::graphql::{Schema, create_schema};

/// Process-wide shared state. Cloned per request; the pool and schema
/// are the only long-lived shared resources.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub schema: Arc<Schema>,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    Ok(AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env()?,
        schema: Arc::new(create_schema()),
    })
}
