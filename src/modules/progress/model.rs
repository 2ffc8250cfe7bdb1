use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user progress on a course module.
///
/// One row per `(user_id, module_id)` pair at all times; writes go
/// through an upsert keyed on that composite.
#[derive(Debug, Clone, Serialize, FromRow, juniper::GraphQLObject)]
pub struct UserModule {
    pub user_id: Uuid,
    pub module_id: Uuid,
    pub progress: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
