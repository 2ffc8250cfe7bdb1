use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::UserModule;

pub struct ProgressService;

impl ProgressService {
    /// Records progress for a `(user, module)` pair.
    ///
    /// A single upsert statement so concurrent writes for the same pair
    /// are resolved by the store's composite key rather than in-process
    /// locking; the latest write wins.
    #[instrument(skip(db))]
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        module_id: Uuid,
        progress: i32,
    ) -> Result<UserModule, AppError> {
        let row = sqlx::query_as::<_, UserModule>(
            "INSERT INTO user_modules (user_id, module_id, progress) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, module_id) \
             DO UPDATE SET progress = EXCLUDED.progress, updated_at = now() \
             RETURNING user_id, module_id, progress, created_at, updated_at",
        )
        .bind(user_id)
        .bind(module_id)
        .bind(progress)
        .fetch_one(db)
        .await?;

        Ok(row)
    }

    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<UserModule>, AppError> {
        let rows = sqlx::query_as::<_, UserModule>(
            "SELECT user_id, module_id, progress, created_at, updated_at \
             FROM user_modules WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(rows)
    }
}
