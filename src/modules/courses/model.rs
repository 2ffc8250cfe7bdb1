use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A course unit. Created only through the ADMIN-gated `createModule`
/// mutation; readable by anyone who reaches the GraphQL surface.
#[derive(Debug, Clone, Serialize, FromRow, juniper::GraphQLObject)]
pub struct Module {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
