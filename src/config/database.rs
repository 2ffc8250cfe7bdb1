//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL` and shared
//! process-wide through [`crate::state::AppState`]; it is cheaply
//! cloneable and safe to use from concurrent request tasks.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails. The
/// server cannot do anything useful without its store, so this aborts
/// startup.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
