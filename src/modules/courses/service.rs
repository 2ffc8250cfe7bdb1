use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::Module;

pub struct CourseService;

impl CourseService {
    pub async fn list(db: &PgPool) -> Result<Vec<Module>, AppError> {
        let modules = sqlx::query_as::<_, Module>(
            "SELECT id, title, description, created_at, updated_at FROM modules \
             ORDER BY created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(modules)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, title: &str, description: &str) -> Result<Module, AppError> {
        let module = sqlx::query_as::<_, Module>(
            "INSERT INTO modules (title, description) VALUES ($1, $2) \
             RETURNING id, title, description, created_at, updated_at",
        )
        .bind(title)
        .bind(description)
        .fetch_one(db)
        .await?;

        Ok(module)
    }
}
