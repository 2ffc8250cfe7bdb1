use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::PublicUser;

pub struct UserService;

impl UserService {
    /// Fetches the public view of a user, or `None` if the id no longer
    /// resolves (e.g. the account was deleted after the token was issued).
    pub async fn find_public(db: &PgPool, id: Uuid) -> Result<Option<PublicUser>, AppError> {
        let user = sqlx::query_as::<_, PublicUser>(
            "SELECT id, email, name, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
